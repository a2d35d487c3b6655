use std::sync::{Mutex, PoisonError};

use envio_engine::{EnvStore, ProcessEnv};
use envio_reflect::derive::Reflect;

// Every test touching the process environment holds this lock.
static ENV_LOCK: Mutex<()> = Mutex::new(());

#[derive(Reflect, Debug, Default, PartialEq)]
struct Service {
    #[env("ENVIO_TEST_SERVICE_NAME,m")]
    pub name: String,
    #[env("ENVIO_TEST_SERVICE_WORKERS")]
    pub workers: Option<u8>,
    #[env("ENVIO_TEST_SERVICE_TAGS")]
    pub tags: Vec<String>,
}

#[test]
fn global_round_trip() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    let value = Service {
        name: "api".into(),
        workers: Some(4),
        tags: vec!["a".into(), "b".into()],
    };
    envio_engine::set(&value).unwrap();
    assert_eq!(
        ProcessEnv.read("ENVIO_TEST_SERVICE_TAGS").as_deref(),
        Some(&b"a,b"[..])
    );

    let mut back = Service::default();
    envio_engine::get(&mut back).unwrap();
    assert_eq!(back, value);
}

#[test]
fn missing_mandatory_in_process_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    #[derive(Reflect, Default)]
    struct Required {
        #[env("ENVIO_TEST_NEVER_SET,m")]
        pub value: String,
    }

    let mut value = Required::default();
    let err = envio_engine::get(&mut value).unwrap_err();
    assert_eq!(
        err.to_string(),
        "env: the required variable $ENVIO_TEST_NEVER_SET is missing"
    );
}

#[cfg(unix)]
#[test]
fn raw_bytes_survive_the_process_env() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    ProcessEnv
        .write("ENVIO_TEST_RAW_BYTES", &[0xFF, 0x01, b'x'])
        .unwrap();
    assert_eq!(
        ProcessEnv.read("ENVIO_TEST_RAW_BYTES"),
        Some(vec![0xFF, 0x01, b'x'])
    );
}
