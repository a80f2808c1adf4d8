use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};
use passform::Settings;
use passform::form::Form;
use passform::form::fields;
use passform::form::read::read_request;
use serial_test::serial;

/// Keeps every record so tests can assert on what the form logged.
struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};

fn install() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
    CAPTURE.records.lock().unwrap().clear();
}

fn errors() -> Vec<String> {
    CAPTURE
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Error)
        .map(|(_, message)| message.clone())
        .collect()
}

#[test]
#[serial]
fn missing_checkbox_logs_an_error() {
    install();
    let mut form = Form::password_generator(&Settings::default());
    form.remove(fields::UPPERCASE);

    let request = read_request(&form);

    assert!(!request.include_uppercase);
    assert_eq!(
        errors(),
        vec!["Could not find uppercase input element.".to_string()]
    );
}

#[test]
#[serial]
fn missing_length_and_exclude_log_errors() {
    install();
    let mut form = Form::password_generator(&Settings::default());
    form.remove(fields::LENGTH);
    form.remove(fields::EXCLUDE);

    let request = read_request(&form);

    assert_eq!(request.length, 12);
    assert_eq!(request.exclude_characters, "");
    let logged = errors();
    assert!(logged.contains(&"Could not find length input element.".to_string()));
    assert!(logged.contains(&"Could not find exclude input element.".to_string()));
}

#[test]
#[serial]
fn complete_form_logs_no_errors() {
    install();
    let form = Form::password_generator(&Settings::default());

    read_request(&form);

    assert!(errors().is_empty(), "unexpected errors: {:?}", errors());
}
