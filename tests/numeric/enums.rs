//! Numeric enums

use crate::common::*;
use polynum::{numeric_enum, NumericEnum};

numeric_enum! {
    /// Days of the week
    pub struct DayOfWeek(i32) {
        Sunday = 0,
        Monday = 1,
        Tuesday = 2,
        Wednesday = 3,
        Thursday = 4,
        Friday = 5,
        Saturday = 6,
    }
}

numeric_enum! {
    /// File permission bits
    pub struct Permissions(u16) {
        Read = 4,
        Write = 2,
        Execute = 1,
        /// Alias of `Read | Write`
        ReadWrite = 6,
    }
}

numeric_enum! {
    pub struct Tiny(i8) {
        Low = -128,
        High = 127,
    }
}

#[test]
fn arithmetic_follows_the_representation() {
    assert_eq!(
        polynum::add(DayOfWeek(3), DayOfWeek(2)).unwrap(),
        DayOfWeek::Friday
    );
    assert_eq!(polynum::negate(DayOfWeek(3)).unwrap(), DayOfWeek(-3));
    assert_eq!(
        polynum::add(Tiny::High, Tiny(1)).unwrap(),
        Tiny::Low,
        "fixed-width enum arithmetic wraps like its representation"
    );
    assert_kind(
        polynum::divide(DayOfWeek::Monday, DayOfWeek::Sunday),
        ErrorKind::DivideByZero,
    );
}

#[test]
fn unsigned_representation_has_no_negate() {
    assert_kind(
        polynum::negate(Permissions::Read),
        ErrorKind::UnsupportedOperation,
    );
    assert_kind(polynum::minus_one::<Permissions>(), ErrorKind::UnsupportedOperation);
    assert_eq!(
        polynum::bitwise_or(Permissions::Read, Permissions::Write).unwrap(),
        Permissions::ReadWrite
    );
    assert_eq!(
        polynum::bitwise_and(Permissions::ReadWrite, Permissions::Execute).unwrap(),
        Permissions(0)
    );
}

#[test]
fn type_code_is_the_representation_code() {
    assert_eq!(polynum::type_code::<DayOfWeek>().unwrap(), TypeCode::I32);
    assert_eq!(polynum::type_code::<Permissions>().unwrap(), TypeCode::U16);
}

#[test]
fn member_names_and_undefined_values() {
    assert_eq!(DayOfWeek::Tuesday.name(), Some("Tuesday"));
    assert_eq!(DayOfWeek(42).name(), None);
    assert_eq!(Permissions::members().len(), 4);
    assert_eq!(polynum::to_string(DayOfWeek(42), None).unwrap(), "42");
    assert_eq!(polynum::to_string(DayOfWeek::Friday, Some("G")).unwrap(), "Friday");
    assert_eq!(polynum::to_string(DayOfWeek::Friday, Some("D")).unwrap(), "5");
    assert_eq!(polynum::to_string(Permissions::ReadWrite, Some("X")).unwrap(), "0006");
    assert_eq!(polynum::to_string(DayOfWeek(-1), Some("X")).unwrap(), "FFFFFFFF");
    assert_kind(polynum::to_string(DayOfWeek::Friday, Some("F2")), ErrorKind::Format);
}

#[test]
fn parsing_prefers_member_names() {
    assert_eq!(
        polynum::parse::<DayOfWeek>("Saturday", None).unwrap(),
        DayOfWeek::Saturday
    );
    assert_eq!(polynum::parse::<DayOfWeek>("  6 ", None).unwrap(), DayOfWeek::Saturday);
    assert_eq!(polynum::parse::<DayOfWeek>("-17", None).unwrap(), DayOfWeek(-17));
    assert_kind(polynum::parse::<DayOfWeek>("Funday", None), ErrorKind::InvalidArgument);
    assert_kind(polynum::parse::<DayOfWeek>("SATURDAY", None), ErrorKind::InvalidArgument);
    assert_kind(polynum::parse::<Tiny>("128", None), ErrorKind::Overflow);
    assert_eq!(
        polynum::parse::<Permissions>("6", Some(NumberStyles::HEX_NUMBER)).unwrap(),
        Permissions::ReadWrite
    );
}

#[test]
fn enums_convert_like_their_representation() {
    assert_eq!(polynum::convert::<DayOfWeek, i64>(DayOfWeek::Friday).unwrap(), 5);
    assert_eq!(polynum::convert::<u8, DayOfWeek>(3).unwrap(), DayOfWeek::Wednesday);
    assert_kind(polynum::convert::<i32, Permissions>(-1), ErrorKind::Overflow);
}

#[test]
fn optional_enums_compose() {
    assert_eq!(
        polynum::add(Some(DayOfWeek::Monday), Some(DayOfWeek::Monday)).unwrap(),
        Some(DayOfWeek::Tuesday)
    );
    assert_eq!(polynum::add(Some(DayOfWeek::Monday), None).unwrap(), None);
    assert_eq!(polynum::to_string(Some(DayOfWeek::Sunday), None).unwrap(), "Sunday");
}

#[test]
fn enums_through_the_facade() {
    let day = Number::create(DayOfWeek::Thursday).unwrap();
    let next = (&day + DayOfWeek(1)).unwrap();
    assert_eq!(next.to_string(), "Friday");
    assert!(day < next);
    assert!((day >> 1).unwrap() == DayOfWeek::Tuesday);
}
