use crate::{DateTime, Error};
use chrono::{Local, NaiveDate, TimeZone};
use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res},
    sequence::{terminated, tuple},
    IResult,
};
use std::str::FromStr;

/// `(year, month, day, hour, minute, second)` as read from the wire.
type Fields = (i32, u32, u32, u32, u32, u32);

/// Exactly `width` ASCII digits.
fn fixed<'a, T: FromStr>(width: usize) -> impl FnMut(&'a str) -> IResult<&'a str, T> {
    map_res(
        take_while_m_n(width, width, |c: char| c.is_ascii_digit()),
        |s: &'a str| s.parse::<T>(),
    )
}

/// `YYYYMMDD`
fn date(i: &str) -> IResult<&str, (i32, u32, u32)> {
    tuple((fixed(4), fixed(2), fixed(2)))(i)
}

/// `HH:MM:SS`
fn time(i: &str) -> IResult<&str, (u32, u32, u32)> {
    tuple((
        terminated(fixed(2), char(':')),
        terminated(fixed(2), char(':')),
        fixed(2),
    ))(i)
}

fn iso8601(i: &str) -> IResult<&str, Fields> {
    let (i, (year, month, day)) = terminated(date, char('T'))(i)?;
    let (i, (hour, min, sec)) = time(i)?;
    Ok((i, (year, month, day, hour, min, sec)))
}

pub fn parse(text: &str) -> Result<DateTime, Error> {
    let err = |msg: &str| Error::Format {
        ty: "dateTime.iso8601",
        msg: format!("{:?} {}", text, msg),
    };

    let (_, (year, month, day, hour, min, sec)) =
        all_consuming(iso8601)(text).map_err(|_| err("does not match YYYYMMDDTHH:MM:SS"))?;

    let naive = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, min, sec))
        .ok_or_else(|| err("is not a valid calendar date and time"))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(DateTime)
        .ok_or_else(|| err("does not exist in the local timezone"))
}
