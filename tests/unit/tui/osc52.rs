use super::*;

#[test]
fn sequence_carries_base64_payload() {
    assert_eq!(
        build_sequence("", Osc52Env { is_tmux: false }).unwrap(),
        "\x1b]52;c;\x07"
    );
    assert_eq!(
        build_sequence("10", Osc52Env { is_tmux: false }).unwrap(),
        "\x1b]52;c;MTA=\x07"
    );
    assert_eq!(
        build_sequence("2.5", Osc52Env { is_tmux: false }).unwrap(),
        "\x1b]52;c;Mi41\x07"
    );
}

#[test]
fn sequence_is_wrapped_for_tmux() {
    let seq = build_sequence("hi", Osc52Env { is_tmux: true }).unwrap();
    assert_eq!(seq, "\x1bPtmux;\x1b\x1b]52;c;aGk=\x07\x1b\\");
}

#[test]
fn oversized_payloads_are_rejected() {
    let big = "9".repeat(OSC52_MAX_BYTES + 1);
    assert_eq!(
        build_sequence(&big, Osc52Env::default()).unwrap_err(),
        Osc52Error::TooLarge {
            bytes: OSC52_MAX_BYTES + 1
        }
    );
}

#[test]
fn write_sequence_flushes_to_the_sink() {
    let mut sink = Vec::new();
    write_sequence(&mut sink, "42", Osc52Env::default()).unwrap();
    assert_eq!(sink, b"\x1b]52;c;NDI=\x07");
}
