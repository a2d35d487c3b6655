use envio_engine::{Engine, EngineConfig, EnvError, FieldError, MemoryEnv, Op};
use envio_reflect::derive::Reflect;
use envio_reflect::ops::Interface;
use envio_reflect::registry::{BoxError, EnvDecode, EnvEncode};

// -----------------------------------------------------------------------------
// Fixtures

#[derive(Reflect, Debug, Default, Clone, PartialEq)]
struct Simple {
    #[env("ENV_A,m")]
    pub a: String,
    #[env("ENV_B")]
    pub b: bool,
    #[env("ENV_C")]
    pub c: i64,
    pub d: f64,
    e: String,
}

#[derive(Reflect, Debug, Default, PartialEq)]
struct Nested {
    #[env("ENV_X")]
    pub x: String,
    #[env("ENV_Y")]
    pub y: bool,
    #[env("ENV_Z")]
    pub z: i64,
    #[reflect(flatten)]
    simple: Simple,
}

#[derive(Reflect, Debug, Default, PartialEq)]
struct Skip {
    #[env("-")]
    pub s: String,
    #[env("-")]
    pub k: i64,
    #[reflect(flatten)]
    simple: Option<Simple>,
}

#[derive(Reflect, Debug, Default, PartialEq)]
struct Pointer {
    pub a: Option<i64>,
}

#[derive(Reflect, Debug, Default, PartialEq)]
struct DeepEmbed {
    pub foo: Nested,
    #[env("BAR")]
    pub bar: String,
}

#[derive(Reflect, Debug, Default, PartialEq)]
struct SlcArr {
    #[env("ENV_SLC")]
    pub slc: Vec<bool>,
    #[env("ENV_ARR")]
    pub arr: [i64; 5],
    #[env("ENV_BYTES")]
    pub bytes: Vec<u8>,
    #[env("ENV_BYTES_RAW,raw")]
    pub bytes_raw: Vec<u8>,
}

fn simple() -> Simple {
    Simple {
        a: "test".into(),
        b: true,
        c: 28,
        d: 1.5,
        e: "not exported".into(),
    }
}

fn simple_env() -> MemoryEnv {
    MemoryEnv::new()
        .with_var("ENV_A", "test")
        .with_var("ENV_B", "true")
        .with_var("ENV_C", "28")
        .with_var("d", "1.5")
}

fn assert_vars(env: &MemoryEnv, expect: &[(&str, &str)]) {
    for (name, value) in expect {
        assert_eq!(env.get(name).as_deref(), Some(*value), "{name}");
    }
}

const SIMPLE_VARS: [(&str, &str); 4] = [
    ("ENV_A", "test"),
    ("ENV_B", "true"),
    ("ENV_C", "28"),
    ("d", "1.5"),
];

// -----------------------------------------------------------------------------
// Set

#[test]
fn set_simple() {
    let env = MemoryEnv::new();
    Engine::new().set_with(&env, &simple()).unwrap();
    assert_vars(&env, &SIMPLE_VARS);
    assert_eq!(env.len(), 4);
    assert_eq!(env.get("e"), None);
}

#[test]
fn set_nested() {
    let env = MemoryEnv::new();
    let value = Nested {
        x: "value".into(),
        y: false,
        z: 111,
        simple: simple(),
    };
    Engine::new().set_with(&env, &value).unwrap();
    assert_vars(&env, &SIMPLE_VARS);
    assert_vars(&env, &[("ENV_X", "value"), ("ENV_Y", "false"), ("ENV_Z", "111")]);
}

#[test]
fn set_skip() {
    let env = MemoryEnv::new();
    let value = Skip {
        s: "none".into(),
        k: 35,
        simple: Some(simple()),
    };
    Engine::new().set_with(&env, &value).unwrap();
    assert_vars(&env, &SIMPLE_VARS);
    assert_eq!(env.get("s"), None);
    assert_eq!(env.get("k"), None);
}

#[test]
fn set_null_embedded_pointer_writes_zero_record() {
    let env = MemoryEnv::new();
    Engine::new().set_with(&env, &Skip::default()).unwrap();
    // ENV_A is mandatory and zero, so it is left out.
    assert_eq!(env.get("ENV_A"), None);
    assert_vars(&env, &[("ENV_B", "false"), ("ENV_C", "0"), ("d", "0")]);
}

#[test]
fn set_null_pointer_field() {
    let env = MemoryEnv::new();
    Engine::new().set_with(&env, &Pointer::default()).unwrap();
    assert_vars(&env, &[("a", "0")]);

    Engine::new()
        .set_with(&env, &Pointer { a: Some(-4) })
        .unwrap();
    assert_vars(&env, &[("a", "-4")]);
}

#[test]
fn set_deep_embedding() {
    let env = MemoryEnv::new();
    let value = DeepEmbed {
        foo: Nested {
            x: "value".into(),
            y: false,
            z: 111,
            simple: simple(),
        },
        bar: "foo".into(),
    };
    Engine::new().set_with(&env, &value).unwrap();
    assert_vars(&env, &SIMPLE_VARS);
    assert_vars(
        &env,
        &[
            ("ENV_X", "value"),
            ("ENV_Y", "false"),
            ("ENV_Z", "111"),
            ("BAR", "foo"),
        ],
    );
}

#[test]
fn set_arrays_and_slices() {
    let env = MemoryEnv::new();
    let value = SlcArr {
        slc: vec![true, false, true],
        arr: [0, 5, 8, 0, 0],
        bytes: vec![65, 66, 67, 68],
        bytes_raw: vec![65, 66, 67, 68],
    };
    Engine::new().set_with(&env, &value).unwrap();
    assert_vars(
        &env,
        &[
            ("ENV_SLC", "true,false,true"),
            ("ENV_ARR", "0,5,8,0,0"),
            ("ENV_BYTES", "65,66,67,68"),
            ("ENV_BYTES_RAW", "ABCD"),
        ],
    );
}

#[test]
fn set_keeps_value_of_zero_mandatory_field() {
    let env = MemoryEnv::new().with_var("ENV_A", "test");
    let value = Simple {
        b: true,
        c: 28,
        d: 1.5,
        ..Simple::default()
    };
    Engine::new().set_with(&env, &value).unwrap();
    assert_vars(&env, &SIMPLE_VARS);
}

#[test]
fn set_with_custom_separator() {
    let engine = Engine::with_config(EngineConfig::new().with_separator(b';')).unwrap();
    let env = MemoryEnv::new();
    let value = SlcArr {
        slc: vec![false, true],
        ..SlcArr::default()
    };
    engine.set_with(&env, &value).unwrap();
    assert_vars(&env, &[("ENV_SLC", "false;true"), ("ENV_ARR", "0;0;0;0;0")]);

    let mut back = SlcArr::default();
    engine.get_with(&env, &mut back).unwrap();
    assert_eq!(back.slc, [false, true]);
}

// -----------------------------------------------------------------------------
// Get

#[test]
fn get_simple() {
    let mut value = Simple {
        a: "a".into(),
        e: "not exported".into(),
        ..Simple::default()
    };
    Engine::new().get_with(&simple_env(), &mut value).unwrap();
    assert_eq!(value, simple());
}

#[test]
fn get_missing_mandatory() {
    let env = simple_env();
    env.remove("ENV_A");
    let mut value = Simple::default();
    let err = Engine::new().get_with(&env, &mut value).unwrap_err();
    assert!(matches!(err, EnvError::MissingRequired { name: "ENV_A" }));
    assert_eq!(err.to_string(), "env: the required variable $ENV_A is missing");
}

#[test]
fn get_empty_mandatory_is_missing() {
    let env = simple_env().with_var("ENV_A", "");
    let mut value = Simple::default();
    let err = Engine::new().get_with(&env, &mut value).unwrap_err();
    assert!(matches!(err, EnvError::MissingRequired { .. }));
}

#[test]
fn get_invalid_syntax() {
    let env = MemoryEnv::new()
        .with_var("ENV_A", "test")
        .with_var("ENV_B", "?");
    let mut value = Simple::default();
    let err = Engine::new().get_with(&env, &mut value).unwrap_err();
    assert_eq!(
        err.to_string(),
        "env: cannot get data into struct field Simple.ENV_B of type bool: invalid syntax"
    );
    let EnvError::Field {
        op,
        record,
        field,
        source,
        ..
    } = err
    else {
        panic!("expected a field error");
    };
    assert_eq!(op, Op::Get);
    assert_eq!(record, "Simple");
    assert_eq!(field, "b");
    assert!(matches!(source, FieldError::InvalidSyntax));
    // Fields before the failure keep their decoded value.
    assert_eq!(value.a, "test");
}

#[test]
fn get_nested() {
    let env = simple_env()
        .with_var("ENV_X", "value")
        .with_var("ENV_Y", "false")
        .with_var("ENV_Z", "111");
    let mut value = Nested::default();
    Engine::new().get_with(&env, &mut value).unwrap();

    let mut expect = simple();
    expect.e.clear();
    assert_eq!(
        value,
        Nested {
            x: "value".into(),
            y: false,
            z: 111,
            simple: expect,
        }
    );
}

#[test]
fn get_skip() {
    let env = simple_env().with_var("s", "s").with_var("k", "7");
    let mut value = Skip {
        s: "none".into(),
        k: 35,
        simple: Some(Simple::default()),
    };
    Engine::new().get_with(&env, &mut value).unwrap();

    let mut expect = simple();
    expect.e.clear();
    assert_eq!(value.s, "none");
    assert_eq!(value.k, 35);
    assert_eq!(value.simple, Some(expect));
}

#[test]
fn get_null_embedded_pointer() {
    let mut value = Skip::default();
    let err = Engine::new()
        .get_with(&simple_env(), &mut value)
        .unwrap_err();
    assert!(matches!(err, EnvError::NilEmbeddedPointer { .. }));
    assert_eq!(value.simple, None);
}

#[test]
fn get_null_pointer_field() {
    let engine = Engine::new();

    let mut value = Pointer::default();
    engine
        .get_with(&MemoryEnv::new().with_var("a", "28"), &mut value)
        .unwrap();
    assert_eq!(value.a, Some(28));

    // A zero result is not kept.
    let mut value = Pointer::default();
    engine
        .get_with(&MemoryEnv::new().with_var("a", "0"), &mut value)
        .unwrap();
    assert_eq!(value.a, None);

    // An existing pointee is decoded in place.
    let mut value = Pointer { a: Some(3) };
    engine
        .get_with(&MemoryEnv::new().with_var("a", "0"), &mut value)
        .unwrap();
    assert_eq!(value.a, Some(0));
}

#[test]
fn get_deep_embedding() {
    let env = simple_env()
        .with_var("ENV_X", "value")
        .with_var("ENV_Y", "false")
        .with_var("ENV_Z", "111")
        .with_var("BAR", "foo");
    let mut value = DeepEmbed::default();
    Engine::new().get_with(&env, &mut value).unwrap();
    assert_eq!(value.bar, "foo");
    assert_eq!(value.foo.z, 111);
    assert_eq!(value.foo.simple.a, "test");
    assert_eq!(value.foo.simple.d, 1.5);
}

#[test]
fn get_arrays_and_slices() {
    let env = MemoryEnv::new()
        .with_var("ENV_SLC", "true,false,true")
        .with_var("ENV_ARR", "0,5,8")
        .with_var("ENV_BYTES", "65,66,67,68")
        .with_var("ENV_BYTES_RAW", "ABCD");
    let mut value = SlcArr::default();
    Engine::new().get_with(&env, &mut value).unwrap();
    assert_eq!(
        value,
        SlcArr {
            slc: vec![true, false, true],
            arr: [0, 5, 8, 0, 0],
            bytes: vec![65, 66, 67, 68],
            bytes_raw: vec![65, 66, 67, 68],
        }
    );
}

#[test]
fn get_replaces_lists_and_keeps_absent_ones() {
    let env = MemoryEnv::new().with_var("ENV_SLC", "false");
    let mut value = SlcArr {
        slc: vec![true, true, true],
        bytes: vec![1, 2],
        ..SlcArr::default()
    };
    Engine::new().get_with(&env, &mut value).unwrap();
    assert_eq!(value.slc, [false]);
    assert_eq!(value.bytes, [1, 2]);
}

#[test]
fn get_array_overflow() {
    let env = MemoryEnv::new().with_var("ENV_ARR", "1,2,3,4,5,6");
    let mut value = SlcArr::default();
    let err = Engine::new().get_with(&env, &mut value).unwrap_err();
    assert!(matches!(
        err,
        EnvError::Field {
            name: "ENV_ARR",
            source: FieldError::IndexOutOfRange {
                len: 6,
                capacity: 5
            },
            ..
        }
    ));
}

#[test]
fn get_empty_piece_is_a_parse_error() {
    let env = MemoryEnv::new().with_var("ENV_ARR", "1,,3");
    let mut value = SlcArr::default();
    let err = Engine::new().get_with(&env, &mut value).unwrap_err();
    assert!(matches!(
        err,
        EnvError::Field {
            source: FieldError::ParseInt(_),
            ..
        }
    ));
}

// -----------------------------------------------------------------------------
// Raw byte arrays

#[derive(Reflect, Debug, Default, PartialEq)]
struct Key {
    #[env("KEY,raw")]
    pub key: [u8; 4],
}

#[test]
fn raw_byte_array() {
    let engine = Engine::new();
    let env = MemoryEnv::new().with_var("KEY", "AB");
    let mut value = Key::default();
    engine.get_with(&env, &mut value).unwrap();
    assert_eq!(value.key, [b'A', b'B', 0, 0]);

    let env = MemoryEnv::new().with_var("KEY", "ABCDE");
    let err = engine.get_with(&env, &mut value).unwrap_err();
    assert!(matches!(
        err,
        EnvError::Field {
            source: FieldError::IndexOutOfRange { .. },
            ..
        }
    ));

    let env = MemoryEnv::new();
    engine.set_with(&env, &Key { key: *b"WXYZ" }).unwrap();
    assert_eq!(env.get("KEY").as_deref(), Some("WXYZ"));
}

// -----------------------------------------------------------------------------
// Capabilities

#[derive(Reflect, Debug, Default, Clone, Copy, PartialEq)]
#[reflect(encode, decode)]
struct Ai(i32);

impl EnvEncode for Ai {
    fn encode_env(&self) -> Result<Vec<u8>, BoxError> {
        Ok(match self.0 {
            1 => b"yes".to_vec(),
            -1 => b"no".to_vec(),
            _ => b"unknown".to_vec(),
        })
    }
}

impl EnvDecode for Ai {
    fn decode_env(raw: &[u8]) -> Result<Self, BoxError> {
        Ok(match raw {
            b"yes" => Self(1),
            b"no" => Self(-1),
            _ => Self(0),
        })
    }
}

#[derive(Reflect, Debug, Default, PartialEq)]
struct Assert {
    #[env("AI")]
    pub ai: Ai,
}

#[test]
fn custom_encode() {
    let engine = Engine::new();
    for (input, expect) in [(0, "unknown"), (1, "yes"), (-1, "no")] {
        let env = MemoryEnv::new();
        engine.set_with(&env, &Assert { ai: Ai(input) }).unwrap();
        assert_eq!(env.get("AI").as_deref(), Some(expect));
    }
}

#[test]
fn custom_decode() {
    let engine = Engine::new();
    for (input, expect) in [("unknown", 0), ("yes", 1), ("no", -1)] {
        let env = MemoryEnv::new().with_var("AI", input);
        let mut value = Assert::default();
        engine.get_with(&env, &mut value).unwrap();
        assert_eq!(value.ai, Ai(expect));
    }
}

#[test]
fn custom_decode_runs_on_absent_value() {
    let mut value = Assert { ai: Ai(1) };
    Engine::new()
        .get_with(&MemoryEnv::new(), &mut value)
        .unwrap();
    assert_eq!(value.ai, Ai(0));
}

#[derive(Reflect, Debug, Default, PartialEq)]
struct Answers {
    #[env("ANSWERS")]
    pub answers: Vec<Ai>,
}

#[test]
fn custom_sequence_items() {
    let engine = Engine::new();
    let env = MemoryEnv::new();
    let value = Answers {
        answers: vec![Ai(1), Ai(-1), Ai(7)],
    };
    engine.set_with(&env, &value).unwrap();
    assert_eq!(env.get("ANSWERS").as_deref(), Some("yes,no,unknown"));

    let mut back = Answers::default();
    engine.get_with(&env, &mut back).unwrap();
    assert_eq!(back.answers, [Ai(1), Ai(-1), Ai(0)]);
}

#[derive(Reflect, Debug, Default, PartialEq)]
#[reflect(decode)]
struct Port(u16);

impl EnvDecode for Port {
    fn decode_env(raw: &[u8]) -> Result<Self, BoxError> {
        let port: u16 = core::str::from_utf8(raw)?.parse()?;
        if port == 0 {
            return Err("port must not be zero".into());
        }
        Ok(Self(port))
    }
}

#[derive(Reflect, Debug, Default)]
struct Listen {
    #[env("PORT")]
    pub port: Port,
}

#[test]
fn custom_errors_are_wrapped() {
    let env = MemoryEnv::new().with_var("PORT", "0");
    let mut value = Listen::default();
    let err = Engine::new().get_with(&env, &mut value).unwrap_err();
    assert_eq!(
        err.to_string(),
        "env: cannot get data into struct field Listen.PORT of type Port: port must not be zero"
    );
    assert_eq!(value.port, Port(0));

    // Without an encode capability, the built-in form is used.
    let env = MemoryEnv::new();
    Engine::new()
        .set_with(&env, &Listen { port: Port(8080) })
        .unwrap();
    assert_eq!(env.get("PORT").as_deref(), Some("8080"));
}

// -----------------------------------------------------------------------------
// Interfaces and unsupported types

#[derive(Reflect, Debug, Default)]
struct Dynamic {
    #[env("ANY")]
    pub any: Interface,
}

#[test]
fn interface_dispatches_on_held_value() {
    let engine = Engine::new();
    let env = MemoryEnv::new();
    engine
        .set_with(&env, &Dynamic { any: Interface::new(5_u16) })
        .unwrap();
    assert_eq!(env.get("ANY").as_deref(), Some("5"));

    let mut value = Dynamic {
        any: Interface::new(String::new()),
    };
    engine
        .get_with(&MemoryEnv::new().with_var("ANY", "held"), &mut value)
        .unwrap();
    assert_eq!(
        value.any.get().and_then(|v| v.downcast_ref::<String>()).map(String::as_str),
        Some("held")
    );
}

#[test]
fn nil_interface_is_an_error() {
    let engine = Engine::new();
    let err = engine
        .set_with(&MemoryEnv::new(), &Dynamic::default())
        .unwrap_err();
    assert!(matches!(err, EnvError::NilInterface));

    let mut value = Dynamic::default();
    let err = engine
        .get_with(&MemoryEnv::new(), &mut value)
        .unwrap_err();
    assert!(matches!(err, EnvError::NilInterface));
}

#[derive(Reflect, Debug, Default)]
struct Unsupported {
    #[env("LETTER")]
    pub letter: char,
}

#[test]
fn unsupported_field_type() {
    let engine = Engine::new();
    let mut value = Unsupported::default();
    let err = engine
        .get_with(&MemoryEnv::new(), &mut value)
        .unwrap_err();
    assert_eq!(err.to_string(), "env: unsupported type char");
    assert!(engine.set_with(&MemoryEnv::new(), &value).is_err());
}

// -----------------------------------------------------------------------------
// Store failures

#[derive(Reflect, Debug, Default)]
struct Label {
    #[env("LABEL")]
    pub label: String,
    #[env("AFTER")]
    pub after: u8,
}

#[test]
fn rejected_write_stops_the_pass() {
    let env = MemoryEnv::new();
    let value = Label {
        label: "a\0b".into(),
        after: 1,
    };
    let err = Engine::new().set_with(&env, &value).unwrap_err();
    assert!(matches!(
        err,
        EnvError::Field {
            op: Op::Set,
            source: FieldError::Store(envio_engine::StoreError::NulInValue(_)),
            ..
        }
    ));
    assert!(env.is_empty());
}

// -----------------------------------------------------------------------------
// Round trip

#[derive(Reflect, Debug, Default, PartialEq)]
struct Limits {
    #[env("RT_DEPTH")]
    pub depth: i8,
    #[env("RT_OFFSET")]
    pub offset: isize,
    #[env("RT_TOTAL")]
    pub total: u64,
    #[env("RT_RATIO")]
    pub ratio: f32,
}

#[derive(Reflect, Debug, Default, PartialEq)]
struct Everything {
    #[env("RT_FLAG")]
    pub flag: bool,
    #[env("RT_NAME")]
    pub name: String,
    #[env("RT_ALIAS")]
    pub alias: Option<String>,
    #[env("RT_WEIGHTS")]
    pub weights: [u16; 3],
    #[env("RT_OPTIONAL")]
    pub optional: Vec<Option<i32>>,
    #[env("RT_BLOB,raw")]
    pub blob: Vec<u8>,
    pub limits: Limits,
    #[reflect(flatten)]
    pub answer: Assert,
}

#[test]
fn round_trip() {
    let engine = Engine::new();
    let env = MemoryEnv::new();
    let value = Everything {
        flag: true,
        name: "node-1".into(),
        alias: Some("primary".into()),
        weights: [3, 0, 65535],
        optional: vec![Some(-1), Some(0), Some(9)],
        blob: b"\x01raw,bytes".to_vec(),
        limits: Limits {
            depth: -128,
            offset: -42,
            total: u64::MAX,
            ratio: 0.1,
        },
        answer: Assert { ai: Ai(-1) },
    };
    engine.set_with(&env, &value).unwrap();
    assert_eq!(env.get("RT_OPTIONAL").as_deref(), Some("-1,0,9"));
    assert_eq!(env.get("RT_RATIO").as_deref(), Some("0.1"));
    assert_eq!(env.get("AI").as_deref(), Some("no"));

    let mut back = Everything::default();
    engine.get_with(&env, &mut back).unwrap();
    assert_eq!(back, value);
}

// -----------------------------------------------------------------------------
// Scalar text forms

#[derive(Reflect, Debug, Default, PartialEq)]
struct Extremes {
    #[env("EX_BIG")]
    pub big: f64,
    #[env("EX_SMALL")]
    pub small: f32,
    #[env("EX_COUNT")]
    pub count: u8,
}

#[test]
fn floats_use_exponent_form_when_shorter() {
    let engine = Engine::new();
    let env = MemoryEnv::new();
    let value = Extremes {
        big: 1e300,
        small: 1e-30,
        count: 7,
    };
    engine.set_with(&env, &value).unwrap();
    assert_eq!(env.get("EX_BIG").as_deref(), Some("1e+300"));
    assert_eq!(env.get("EX_SMALL").as_deref(), Some("1e-30"));

    let mut back = Extremes::default();
    engine.get_with(&env, &mut back).unwrap();
    assert_eq!(back, value);
}

#[test]
fn unsigned_plus_sign_is_invalid() {
    let env = MemoryEnv::new().with_var("EX_COUNT", "+7");
    let mut value = Extremes::default();
    let err = Engine::new().get_with(&env, &mut value).unwrap_err();
    assert_eq!(
        err.to_string(),
        "env: cannot get data into struct field Extremes.EX_COUNT of type u8: invalid syntax"
    );
    assert_eq!(value.count, 0);
}

// -----------------------------------------------------------------------------
// Records disagreeing with their description

mod mismatch {
    use envio_reflect::Reflect;
    use envio_reflect::impls::NonGenericTypeInfoCell;
    use envio_reflect::info::{NamedField, StructInfo, TypeInfo, Typed};
    use envio_reflect::ops::{ReflectMut, ReflectRef, Struct};

    /// Describes a field it never hands out.
    pub struct Hollow;

    impl Typed for Hollow {
        fn type_info() -> &'static TypeInfo {
            static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
            CELL.get_or_init(|| {
                TypeInfo::Struct(StructInfo::new::<Self>(
                    "Hollow",
                    &[NamedField::new::<u8>("level").with_tag("HOLLOW_LEVEL")],
                ))
            })
        }
    }

    impl Reflect for Hollow {
        fn reflect_ref(&self) -> ReflectRef<'_> {
            ReflectRef::Struct(self)
        }

        fn reflect_mut(&mut self) -> ReflectMut<'_> {
            ReflectMut::Struct(self)
        }

        fn reflect_is_zero(&self) -> bool {
            false
        }
    }

    impl Struct for Hollow {
        fn field_at(&self, _: usize) -> Option<&dyn Reflect> {
            None
        }

        fn field_at_mut(&mut self, _: usize) -> Option<&mut dyn Reflect> {
            None
        }

        fn field_len(&self) -> usize {
            0
        }
    }
}

#[test]
fn missing_field_slot_is_an_error() {
    let engine = Engine::new();
    let env = MemoryEnv::new().with_var("HOLLOW_LEVEL", "3");

    let err = engine.set_with(&env, &mismatch::Hollow).unwrap_err();
    assert_eq!(
        err.to_string(),
        "env: cannot set data from struct field Hollow.HOLLOW_LEVEL of type u8: \
         value does not match its type description"
    );

    let err = engine.get_with(&env, &mut mismatch::Hollow).unwrap_err();
    assert!(matches!(
        err,
        EnvError::Field {
            op: Op::Get,
            source: FieldError::KindMismatch,
            ..
        }
    ));
}
