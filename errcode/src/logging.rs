use slog::{o, Drain, Key, Logger, OwnedKV, Record, SendSyncRefUnwindSafeKV, Serializer, KV};

use super::{Error, DEFAULT_LOGGER_CONFIG};

#[derive(Clone, Copy, Debug)]
pub struct LoggerConfig {
    /// chrono strftime pattern for the record timestamp.
    pub timestamp_format: &'static str,
}

#[inline]
pub fn term_logger() -> Logger {
    term_logger_with_values(o!())
}

#[inline]
pub fn term_logger_with_values<T>(kv: OwnedKV<T>) -> Logger
where
    T: SendSyncRefUnwindSafeKV + 'static,
{
    term_logger_with_config(DEFAULT_LOGGER_CONFIG, kv)
}

pub fn term_logger_with_config<T>(config: LoggerConfig, kv: OwnedKV<T>) -> Logger
where
    T: SendSyncRefUnwindSafeKV + 'static,
{
    let timestamp_format = config.timestamp_format;
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator)
        .use_custom_timestamp(move |f| {
            let dt = chrono::Local::now();
            write!(f, "{}", dt.format(timestamp_format))
        })
        .build()
        .fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    slog::Logger::root(drain, kv)
}

pub fn log_error(logger: &Logger, err: &Error) {
    slog::error!(logger, "{}", err; "err_code" => err.status(), "err_msg" => err.message());
}

impl KV for Error {
    fn serialize(&self, _record: &Record, serializer: &mut dyn Serializer) -> slog::Result {
        serializer.emit_i32("err_code", self.status())?;
        serializer.emit_str("err_msg", self.message())
    }
}

impl slog::Value for Error {
    fn serialize(&self, _record: &Record, key: Key, serializer: &mut dyn Serializer) -> slog::Result {
        serializer.emit_arguments(key, &format_args!("{}", self))
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::Arguments;

    use slog::{b, record, Level};

    use super::*;

    #[derive(Default)]
    struct Collect(Vec<(String, String)>);

    impl Serializer for Collect {
        fn emit_arguments(&mut self, key: Key, val: &Arguments) -> slog::Result {
            self.0.push((key.to_string(), val.to_string()));
            Ok(())
        }
    }

    #[test]
    fn error_as_kv() {
        let err = crate::err!(-7, "bad {}", "input");
        let mut ser = Collect::default();
        KV::serialize(
            &err,
            &record!(Level::Error, "", &format_args!("test"), b!()),
            &mut ser,
        )
        .unwrap();
        assert_eq!(
            ser.0,
            vec![
                ("err_code".to_string(), "-7".to_string()),
                ("err_msg".to_string(), "bad input".to_string()),
            ]
        );
    }

    #[test]
    fn error_as_value() {
        let err = crate::err!(100, "err");
        let mut ser = Collect::default();
        slog::Value::serialize(
            &err,
            &record!(Level::Info, "", &format_args!("test"), b!()),
            "error",
            &mut ser,
        )
        .unwrap();
        assert_eq!(
            ser.0,
            vec![("error".to_string(), "errCode: 100, errMsg: err".to_string())]
        );
    }

    #[test]
    fn log_to_discard() {
        let logger = Logger::root(slog::Discard, o!());
        log_error(&logger, &crate::err!(1, "dropped"));
        slog::info!(logger, "with error"; "error" => crate::err!(2));
    }

    #[test]
    fn build_term_logger() {
        let config = LoggerConfig {
            timestamp_format: "%H:%M:%S",
        };
        let logger = term_logger_with_config(config, o!("component" => "test"));
        log_error(&logger, &crate::err!(3, "to terminal"));
        assert_eq!(DEFAULT_LOGGER_CONFIG.timestamp_format, "%Y-%m-%d %H:%M:%S.%3f");
    }

    #[test]
    fn build_default_term_loggers() {
        log_error(&term_logger(), &crate::err!(4, "default"));
        let logger = term_logger_with_values(o!("component" => "test"));
        log_error(&logger, &crate::err!(5, "with values"));
    }
}
