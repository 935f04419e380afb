// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ByteSource, ByteWindow, DiagnosticSink, InputDevice, ReadOutcome, ui_str};

impl InputDevice {
    /// Read one line into `window`.
    ///
    /// Bytes are copied until a newline (consumed, not copied), end of stream, or until
    /// the window is full. A full window means the line is too long: the remainder of
    /// the line is drained and discarded so it can't leak into the next read, a
    /// diagnostic is written to `sink`, and [`ReadOutcome::Overflow`] is returned. A line
    /// that is exactly `capacity` bytes long counts as too long.
    ///
    /// Nothing persists between calls. The window is cleared first and only reflects
    /// this call.
    pub fn read_line(
        &mut self,
        window: &mut ByteWindow,
        sink: &DiagnosticSink,
    ) -> ReadOutcome {
        window.clear();

        let outcome = self.with_byte_source(|source| {
            loop {
                if window.is_full() {
                    let discarded = drain_line(source);
                    tracing::debug!(
                        message = "Line exceeds window, drained remainder",
                        capacity = window.capacity().get(),
                        discarded
                    );
                    return ReadOutcome::Overflow;
                }

                match source.next_byte() {
                    None if window.is_empty() => return ReadOutcome::EndOfStream,
                    None | Some(b'\n') => return ReadOutcome::Success(window.len()),
                    Some(byte) => {
                        window.try_push(byte);
                    }
                }
            }
        });

        if outcome == ReadOutcome::Overflow {
            sink.report(ui_str::INPUT_EXCEEDS_BUFFER_MSG);
        }

        outcome
    }
}

/// Consume and discard bytes up to and including the next newline, or until the
/// stream ends. Returns how many bytes were discarded, not counting the newline.
fn drain_line(source: &mut ByteSource<'_>) -> usize {
    let mut discarded = 0;
    while let Some(byte) = source.next_byte() {
        if byte == b'\n' {
            break;
        }
        discarded += 1;
    }
    discarded
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use test_case::test_case;

    use super::*;
    use crate::{DiagnosticSinkExt as _, InputDeviceExtMock as _, assert_eq2};

    fn window(capacity: usize) -> ByteWindow {
        ByteWindow::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test_case(1, "\n", 0 ; "empty line in smallest window")]
    #[test_case(4, "abc\n", 3 ; "one byte short of capacity")]
    #[test_case(128, "hello world\n", 11 ; "default sized window")]
    #[test_case(8, "a b\tc\n", 5 ; "whitespace is payload")]
    fn test_success_counts_bytes_before_newline(capacity: usize, input: &str, count: usize) {
        let (sink, sink_mock) = DiagnosticSink::new_mock();
        let mut device = InputDevice::new_mock(input);
        let mut window = window(capacity);

        let outcome = device.read_line(&mut window, &sink);

        assert_eq2!(outcome, ReadOutcome::Success(count));
        assert_eq2!(window.filled(), &input.as_bytes()[..count]);
        assert!(sink_mock.get_copy_of_buffer().is_empty());
    }

    #[test]
    fn test_exhausted_stream_is_end_of_stream() {
        let (sink, sink_mock) = DiagnosticSink::new_mock();
        let mut device = InputDevice::new_mock("");
        let mut window = window(8);

        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::EndOfStream);
        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::EndOfStream);
        assert!(sink_mock.lines().is_empty());
    }

    #[test]
    fn test_final_line_without_newline_is_success() {
        let (sink, _) = DiagnosticSink::new_mock();
        let mut device = InputDevice::new_mock("last");
        let mut window = window(8);

        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::Success(4));
        assert_eq2!(window.filled(), b"last");
        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::EndOfStream);
    }

    #[test]
    fn test_overflow_drains_rest_of_line() {
        let (sink, sink_mock) = DiagnosticSink::new_mock();
        let mut device = InputDevice::new_mock("0123456789\nok\n");
        let mut window = window(4);

        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::Overflow);
        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::Success(2));
        assert_eq2!(window.filled(), b"ok");
        assert_eq2!(sink_mock.lines(), vec![ui_str::INPUT_EXCEEDS_BUFFER_MSG]);
    }

    #[test]
    fn test_line_of_exactly_capacity_overflows() {
        let (sink, _) = DiagnosticSink::new_mock();
        let mut device = InputDevice::new_mock("abcd\nef\n");
        let mut window = window(4);

        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::Overflow);
        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::Success(2));
        assert_eq2!(window.filled(), b"ef");
    }

    #[test]
    fn test_overflow_on_final_line_then_end_of_stream() {
        let (sink, _) = DiagnosticSink::new_mock();
        let mut device = InputDevice::new_mock("toolong");
        let mut window = window(3);

        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::Overflow);
        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::EndOfStream);
    }

    #[test]
    fn test_embedded_zero_bytes_are_payload() {
        let (sink, _) = DiagnosticSink::new_mock();
        let mut device = InputDevice::new_mock(b"a\0b\n".to_vec());
        let mut window = window(8);

        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::Success(3));
        assert_eq2!(window.filled(), b"a\0b");
    }

    #[test]
    fn test_window_reflects_only_latest_read() {
        let (sink, _) = DiagnosticSink::new_mock();
        let mut device = InputDevice::new_mock("long line\n\n");
        let mut window = window(16);

        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::Success(9));
        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::Success(0));
        assert!(window.filled().is_empty());
    }

    #[test]
    fn test_many_overflows_never_leak_bytes() {
        let (sink, sink_mock) = DiagnosticSink::new_mock();
        let input = format!("{}\n{}\nfin\n", "x".repeat(300), "y".repeat(5));
        let mut device = InputDevice::new_mock(input);
        let mut window = window(5);

        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::Overflow);
        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::Overflow);
        assert_eq2!(device.read_line(&mut window, &sink), ReadOutcome::Success(3));
        assert_eq2!(window.filled(), b"fin");
        assert_eq2!(sink_mock.lines().len(), 2);
    }
}
