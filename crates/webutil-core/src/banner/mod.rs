//! Decorative console banners, printed after a fixed deferral.
//!
//! Two historical variants are kept side by side: the framed ASCII banner
//! ([`init_console`]) and the `%c`-styled introduction
//! ([`init_console_intro`]). Both are fire-and-forget: output is scheduled
//! on a detached thread after a fixed delay and cannot be cancelled. Output
//! goes through the [`Console`] sink so embedders (and tests) can redirect
//! it; the default sink writes to stdout.

mod frame;
mod intro;

pub use intro::ConsoleIntro;

use crate::error::Error;
use std::thread;
use std::time::Duration;

/// Deferral before the framed banner is printed.
pub const BANNER_DELAY: Duration = Duration::from_millis(250);

/// Deferral before the styled introduction is printed.
pub const INTRO_DELAY: Duration = Duration::from_millis(500);

/// Console surface the banners print to.
pub trait Console: Send + Sync {
    fn log(&self, message: &str);
    fn clear(&self);

    /// `%c`-styled log. The style directives are opaque tokens understood by
    /// the host console and must be passed through unchanged; sinks without
    /// styling support may ignore `styles`.
    fn log_styled(&self, message: &str, styles: &[&str]) {
        let _ = styles;
        self.log(message);
    }
}

/// Default sink: plain stdout, ANSI clear-screen for `clear`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn log(&self, message: &str) {
        println!("{message}");
    }

    fn clear(&self) {
        print!("\x1b[2J\x1b[1;1H");
    }
}

/// Variant 1: after 250 ms, clear the console and print the framed banner
/// with `title` centered, followed by the fixed credit block.
pub fn init_console(title: &str) {
    init_console_on(StdoutConsole, title);
}

/// [`init_console`] against a caller-provided sink.
pub fn init_console_on<C: Console + 'static>(console: C, title: &str) {
    defer_frame(console, title.to_string(), BANNER_DELAY);
}

/// Variant 2: after 500 ms, print the styled introduction and credit lines.
///
/// Fails synchronously with [`Error::MissingRequiredField`] when `author` or
/// `title` is empty; nothing is scheduled in that case.
pub fn init_console_intro(intro: ConsoleIntro) -> Result<(), Error> {
    init_console_intro_on(StdoutConsole, intro)
}

/// [`init_console_intro`] against a caller-provided sink.
pub fn init_console_intro_on<C: Console + 'static>(
    console: C,
    intro: ConsoleIntro,
) -> Result<(), Error> {
    intro.validate()?;
    defer_intro(console, intro, INTRO_DELAY);
    Ok(())
}

fn defer_frame<C: Console + 'static>(console: C, title: String, delay: Duration) {
    thread::spawn(move || {
        thread::sleep(delay);
        console.clear();
        console.log(&frame::render_frame(&title));
        console.log(frame::CREDIT);
    });
}

fn defer_intro<C: Console + 'static>(console: C, intro: ConsoleIntro, delay: Duration) {
    thread::spawn(move || {
        thread::sleep(delay);
        for line in intro::render_intro(&intro) {
            console.log_styled(&line.message, &line.styles);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Clear,
        Log(String),
        Styled(String, Vec<String>),
    }

    #[derive(Clone, Default)]
    struct CaptureConsole {
        ops: Arc<Mutex<Vec<Op>>>,
    }

    impl CaptureConsole {
        fn ops(&self) -> Vec<Op> {
            self.ops.lock().unwrap().clone()
        }

        fn wait_for_output(&self, expected: usize) -> Vec<Op> {
            let deadline = Instant::now() + Duration::from_secs(2);
            loop {
                let ops = self.ops();
                if ops.len() >= expected || Instant::now() > deadline {
                    return ops;
                }
                thread::sleep(Duration::from_millis(2));
            }
        }
    }

    impl Console for CaptureConsole {
        fn log(&self, message: &str) {
            self.ops.lock().unwrap().push(Op::Log(message.to_string()));
        }

        fn clear(&self) {
            self.ops.lock().unwrap().push(Op::Clear);
        }

        fn log_styled(&self, message: &str, styles: &[&str]) {
            self.ops.lock().unwrap().push(Op::Styled(
                message.to_string(),
                styles.iter().map(|s| s.to_string()).collect(),
            ));
        }
    }

    #[test]
    fn frame_banner_clears_then_logs() {
        let console = CaptureConsole::default();
        defer_frame(console.clone(), "demo".to_string(), Duration::from_millis(5));

        let ops = console.wait_for_output(3);
        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0], Op::Clear);
        assert!(matches!(&ops[1], Op::Log(s) if s.contains("demo")));
        assert!(matches!(&ops[2], Op::Log(s) if s.contains("webutil")));
    }

    #[test]
    fn intro_logs_two_styled_lines() {
        let console = CaptureConsole::default();
        let intro = ConsoleIntro {
            author: "jane".into(),
            title: "demo".into(),
            repository: None,
            website: None,
        };
        defer_intro(console.clone(), intro, Duration::from_millis(5));

        let ops = console.wait_for_output(2);
        assert_eq!(ops.len(), 2);
        assert!(matches!(&ops[0], Op::Styled(m, s) if m == "%cdemo" && s.len() == 1));
        assert!(matches!(&ops[1], Op::Styled(m, _) if m == "%cbuilt by jane"));
    }

    #[test]
    fn empty_author_errors_and_schedules_nothing() {
        let console = CaptureConsole::default();
        let intro = ConsoleIntro {
            author: String::new(),
            title: "demo".into(),
            repository: None,
            website: None,
        };

        let err = init_console_intro_on(console.clone(), intro).unwrap_err();
        assert!(matches!(err, Error::MissingRequiredField { field: "author" }));

        thread::sleep(Duration::from_millis(30));
        assert!(console.ops().is_empty());
    }

    #[test]
    fn nothing_is_printed_before_the_deferral() {
        let console = CaptureConsole::default();
        defer_frame(console.clone(), "demo".to_string(), Duration::from_millis(200));
        assert!(console.ops().is_empty());
    }
}
