use either::Either::{Left, Right};
use flatline::{
    Fields, fields,
    sans::{
        Alignment, Cons, Decoder, Error, Field, FieldError, FromFields, Guard, Nil, ReadError,
        Reader, Sequence, field::InvalidRange, read,
    },
};

#[derive(Debug, Clone, PartialEq)]
struct Person {
    name: String,
    age: u32,
}

impl FromFields for Person {
    type Fields = Fields![String, u32];

    fn from_fields(Cons(name, Cons(age, Nil)): Self::Fields) -> Self {
        Self { name, age }
    }
}

fn name() -> Field<String, impl Reader<String> + Clone> {
    Field::new(0, 5, Alignment::Left, ' ', read::text)
}

fn age() -> Field<u32, impl Reader<u32> + Clone> {
    Field::new(5, 8, Alignment::Right, '0', read::integer::<u32>)
}

fn person() -> impl Decoder<Output = Person> {
    fields![name(), age()].map_into::<Person>()
}

fn person_with_default_age() -> impl Decoder<Output = Person> {
    fields![name(), age().with_default(0)].map_into::<Person>()
}

fn bob(age: u32) -> Person {
    Person {
        name: "Bob".into(),
        age,
    }
}

#[test]
fn decode_record() {
    assert_eq!(person().decode("Bob  042"), Ok(bob(42)));
}

#[test]
fn decode_record_longer_than_expected() {
    assert_eq!(
        person().decode("Bob  0420"),
        Err(Error::LineLongerThanExpected {
            line: "Bob  0420".into(),
            excess: "0".into(),
        })
    );
}

#[test]
fn decode_record_with_any_excess() {
    let decoder = person();

    for excess in ["0", " ", "   ", "XYZ", "é"] {
        let line = format!("Bob  042{excess}");
        assert_eq!(
            decoder.decode(&line),
            Err(Error::LineLongerThanExpected {
                line: line.clone(),
                excess: excess.into(),
            })
        );
    }
}

#[test]
fn decode_unreadable_field() {
    let Err(Error::ParsingFailed {
        raw,
        start,
        end,
        alignment,
        padding,
        cause,
    }) = person().decode("Bob  0XY")
    else {
        panic!("expected a parsing failure");
    };

    assert_eq!(raw, "0XY");
    assert_eq!((start, end), (5, 8));
    assert_eq!(alignment, Alignment::Right);
    assert_eq!(padding, '0');
    assert!(matches!(cause, FieldError::Read(_)));
}

#[test]
fn decode_unreadable_field_with_default() {
    assert_eq!(person_with_default_age().decode("Bob  0XY"), Ok(bob(0)));
}

#[test]
fn decode_missing_field_with_default() {
    assert_eq!(person_with_default_age().decode("Bob  0"), Ok(bob(0)));
    assert_eq!(person_with_default_age().decode("Bob  "), Ok(bob(0)));
}

#[test]
fn decode_short_line() {
    assert_eq!(
        person().decode("Bob"),
        Err(Error::ParsingFailed {
            raw: "Bob".into(),
            start: 0,
            end: 5,
            alignment: Alignment::Left,
            padding: ' ',
            cause: FieldError::FieldExtractionFailed { length: 3 },
        })
    );

    assert_eq!(
        person().decode("Bob  04"),
        Err(Error::ParsingFailed {
            raw: "04".into(),
            start: 5,
            end: 8,
            alignment: Alignment::Right,
            padding: '0',
            cause: FieldError::FieldExtractionFailed { length: 7 },
        })
    );
}

#[test]
fn decode_field_past_line_end() {
    let field = Field::new(10, 12, Alignment::Left, ' ', read::text);

    assert_eq!(
        field.decode("short"),
        Err(Error::ParsingFailed {
            raw: String::new(),
            start: 10,
            end: 12,
            alignment: Alignment::Left,
            padding: ' ',
            cause: FieldError::FieldExtractionFailed { length: 5 },
        })
    );
}

#[test]
fn decode_first_error_wins() {
    let decoder = fields![
        Field::new(0, 2, Alignment::Right, '0', read::integer::<u8>),
        Field::new(2, 4, Alignment::Right, '0', read::integer::<u8>),
    ];

    let Err(Error::ParsingFailed { start, raw, .. }) = decoder.decode("abcd") else {
        panic!("expected a parsing failure");
    };

    assert_eq!((start, raw.as_str()), (0, "ab"));

    let Err(Error::ParsingFailed { start, raw, .. }) = decoder.decode("12cd") else {
        panic!("expected a parsing failure");
    };

    assert_eq!((start, raw.as_str()), (2, "cd"));
}

#[test]
fn decode_field_error_before_overflow() {
    assert!(matches!(
        person().decode("Bob  0XY!"),
        Err(Error::ParsingFailed { start: 5, .. })
    ));
}

#[test]
fn strip_padding_on_one_side() {
    let left = Field::new(0, 6, Alignment::Left, ' ', read::text);
    let right = Field::new(0, 6, Alignment::Right, ' ', read::text);

    assert_eq!(left.decode(" ab   "), Ok(" ab".to_string()));
    assert_eq!(right.decode(" ab   "), Ok("ab   ".to_string()));

    let zeros = Field::new(0, 6, Alignment::Right, '0', read::text);
    assert_eq!(zeros.decode("000100"), Ok("100".to_string()));
    assert_eq!(zeros.decode("000000"), Ok(String::new()));
}

#[test]
fn decode_multibyte_characters() {
    assert_eq!(
        person().decode("Zoë  042"),
        Ok(Person {
            name: "Zoë".into(),
            age: 42
        })
    );

    assert!(matches!(
        person().decode("Zoë  042ü"),
        Err(Error::LineLongerThanExpected { excess, .. }) if excess == "ü"
    ));
}

#[test]
fn decode_empty_field() {
    let field = Field::new(3, 3, Alignment::Left, ' ', read::text);

    assert_eq!(field.max_length(), 0);
    assert_eq!(field.decode("abc"), Ok(String::new()));
    assert_eq!(field.decode("abcdef"), Ok(String::new()));
}

#[test]
fn decode_is_repeatable() {
    let decoder = person();

    for line in ["Bob  042", "Bob  0420", "Bob  0XY", "Bob"] {
        assert_eq!(decoder.decode(line), decoder.decode(line));
    }
}

#[test]
fn sum_max_lengths() {
    assert_eq!(Nil.max_length(), 0);
    assert_eq!(Nil.prepend_last(age()).max_length(), 3);
    assert_eq!(person().max_length(), 8);

    let wide = fields![
        Field::new(0, 4, Alignment::Left, ' ', read::text),
        Field::new(4, 10, Alignment::Left, ' ', read::text),
        Field::new(10, 11, Alignment::Left, ' ', read::text),
        Field::new(11, 31, Alignment::Left, ' ', read::text),
    ];

    assert_eq!(wide.max_length(), 31);
    assert_eq!(wide.map(|_| ()).max_length(), 31);
}

#[test]
fn compose_with_operator() {
    let decoder = (Nil << Guard::new(age()) << name()).map_into::<Person>();

    assert_eq!(decoder.max_length(), 8);
    assert_eq!(decoder.decode("Bob  042"), Ok(bob(42)));
    assert!(matches!(
        decoder.decode("Bob  0420"),
        Err(Error::LineLongerThanExpected { .. })
    ));
}

#[test]
fn compose_without_guard() {
    let decoder = (Nil << age() << name()).map_into::<Person>();

    assert_eq!(decoder.decode("Bob  0420"), Ok(bob(42)));
}

#[test]
fn preserve_declaration_order() {
    let decoder = fields![
        Field::new(0, 1, Alignment::Left, ' ', read::text),
        Field::new(1, 2, Alignment::Left, ' ', read::text),
        Field::new(2, 3, Alignment::Left, ' ', read::text),
    ]
    .map_into::<(String, String, String)>();

    assert_eq!(
        decoder.decode("abc"),
        Ok(("a".into(), "b".into(), "c".into()))
    );
}

#[test]
fn map_sequence() {
    let decoder = fields![name(), age()].map(|Cons(name, Cons(age, Nil))| format!("{name}:{age}"));

    assert_eq!(decoder.decode("Bob  042"), Ok("Bob:42".to_string()));
}

fn tag(expected: &'static str) -> impl Fn(&str) -> Result<(), ReadError> + Clone {
    move |text: &str| {
        if text == expected {
            Ok(())
        } else {
            Err(ReadError::new(format!("Expected {expected:?}.")))
        }
    }
}

#[test]
fn decode_alternative_layouts() {
    let header = fields![
        Field::new(0, 3, Alignment::Left, ' ', tag("HDR")),
        Field::new(3, 11, Alignment::Left, ' ', read::text),
    ]
    .map(|Cons((), Cons(file, Nil))| file);

    let detail = fields![
        Field::new(0, 3, Alignment::Left, ' ', tag("DTL")),
        Field::new(3, 9, Alignment::Right, '0', read::integer::<u64>),
    ]
    .map(|Cons((), Cons(amount, Nil))| amount);

    let decoder = header.or(detail);

    assert_eq!(decoder.max_length(), 11);
    assert_eq!(decoder.decode("HDRledger  "), Ok(Left("ledger".to_string())));
    assert_eq!(decoder.decode("DTL000420"), Ok(Right(420)));

    assert!(matches!(
        decoder.decode("XXX000420"),
        Err(Error::ParsingFailed { start: 0, raw, .. }) if raw == "XXX"
    ));
}

#[test]
fn reject_reversed_range() {
    assert_eq!(
        Field::try_new(5, 3, Alignment::Left, ' ', read::text).err(),
        Some(InvalidRange { start: 5, end: 3 })
    );
}

#[test]
#[should_panic]
fn panic_on_reversed_range() {
    Field::new(5, 3, Alignment::Left, ' ', read::text);
}

#[test]
fn share_between_threads() {
    let decoder = person();

    std::thread::scope(|s| {
        for age in 1..9 {
            let decoder = &decoder;
            s.spawn(move || {
                let line = format!("Bob  {age:03}");
                assert_eq!(decoder.decode(&line), Ok(bob(age)));
            });
        }
    });
}
