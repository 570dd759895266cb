use std::fmt::Display;
use std::io::{BufWriter, Write};

use tracing::debug;

use super::error::CabrilloError;
use super::timestamp::format_timestamp;
use super::wrap::{value_budget, wrap};
use crate::model::{Callsign, Log, Offtime, Qso, Tag};

/// One `TAG: value` output line.
#[derive(Debug)]
struct Row<'a> {
    tag: &'a Tag,
    value: String,
}

impl Row<'_> {
    fn write<W: Write>(&self, writer: &mut W, omit_if_empty: bool) -> Result<(), CabrilloError> {
        if omit_if_empty && self.value.is_empty() {
            return Ok(());
        }
        writeln!(writer, "{}: {}", self.tag, self.value)?;
        Ok(())
    }
}

/// Writes `log` in canonical tag order, omitting empty header fields.
///
/// Header fields come first, then custom tags, `QSO` lines, `X-QSO` lines
/// and `END-OF-LOG`. With `append_transmitter` every QSO line ends with its
/// transmitter number.
pub fn write<W: Write>(writer: W, log: &Log, append_transmitter: bool) -> Result<(), CabrilloError> {
    write_with_tags(writer, log, append_transmitter, true, &log.canonical_tags())
}

/// Writes `log` emitting exactly the header `tags` given, in that order.
///
/// Tags without a dedicated [`Log`] field are looked up in [`Log::custom`].
/// When `omit_if_empty` is set, header lines with an empty value are left
/// out. The first write error aborts and is returned; whatever was written
/// up to then stays in `writer`.
pub fn write_with_tags<W: Write>(
    writer: W,
    log: &Log,
    append_transmitter: bool,
    omit_if_empty: bool,
    tags: &[Tag],
) -> Result<(), CabrilloError> {
    let mut writer = BufWriter::new(writer);

    Row {
        tag: &Tag::START_OF_LOG,
        value: log.cabrillo_version.clone(),
    }
    .write(&mut writer, false)?;

    for tag in tags {
        for row in header_rows(log, tag) {
            row.write(&mut writer, omit_if_empty)?;
        }
    }

    write_qsos(&mut writer, &Tag::QSO, &log.qso_data, append_transmitter)?;
    write_qsos(&mut writer, &Tag::X_QSO, &log.ignored_qsos, append_transmitter)?;

    Row {
        tag: &Tag::END_OF_LOG,
        value: String::new(),
    }
    .write(&mut writer, false)?;
    writer.flush()?;

    debug!(
        tags = tags.len(),
        qsos = log.qso_data.len(),
        ignored_qsos = log.ignored_qsos.len(),
        "wrote cabrillo log"
    );
    Ok(())
}

/// Formats a complete log as [`write`] would.
pub fn format_log(log: &Log, append_transmitter: bool) -> Result<String, CabrilloError> {
    let mut buf = Vec::new();
    write(&mut buf, log, append_transmitter)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Formats the value of a `QSO:` line (without the tag).
///
/// Empty fields are left out rather than producing double spaces.
pub fn format_qso(qso: &Qso, append_transmitter: bool) -> String {
    let mut fields = vec![
        qso.frequency.to_string(),
        qso.mode.to_string(),
        format_timestamp(qso.timestamp),
        qso.sent.call.to_string(),
    ];
    fields.extend(qso.sent.exchange.iter().cloned());
    fields.push(qso.received.call.to_string());
    fields.extend(qso.received.exchange.iter().cloned());
    if append_transmitter {
        fields.push(qso.transmitter.to_string());
    }
    fields.retain(|field| !field.is_empty());
    fields.join(" ")
}

fn write_qsos<W: Write>(
    writer: &mut W,
    tag: &Tag,
    qsos: &[Qso],
    append_transmitter: bool,
) -> Result<(), CabrilloError> {
    for qso in qsos {
        writeln!(writer, "{}: {}", tag, format_qso(qso, append_transmitter))?;
    }
    Ok(())
}

// Produces the rows for one header tag.
fn header_rows<'a>(log: &Log, tag: &'a Tag) -> Vec<Row<'a>> {
    let single = |value: String| vec![Row { tag, value }];
    let category = &log.category;
    match tag.as_str() {
        "CREATED-BY" => single(log.created_by.clone()),
        "CONTEST" => single(log.contest.clone()),
        "CALLSIGN" => single(log.callsign.to_string()),
        "OPERATORS" => wrapped_rows(tag, &operators_value(log)),
        "GRID-LOCATOR" => single(log.grid_locator.to_string()),
        "LOCATION" => single(log.location.clone()),
        "CLAIMED-SCORE" => single(log.claimed_score.to_string()),
        "OFFTIME" => single(offtime_value(&log.offtime)),
        "CATEGORY-ASSISTED" => single(token(&category.assisted)),
        "CATEGORY-BAND" => single(token(&category.band)),
        "CATEGORY-MODE" => single(token(&category.mode)),
        "CATEGORY-OPERATOR" => single(token(&category.operator)),
        "CATEGORY-POWER" => single(token(&category.power)),
        "CATEGORY-STATION" => single(token(&category.station)),
        "CATEGORY-TIME" => single(token(&category.time)),
        "CATEGORY-TRANSMITTER" => single(token(&category.transmitter)),
        "CATEGORY-OVERLAY" => single(token(&category.overlay)),
        "CERTIFICATE" => single(if log.certificate { "YES" } else { "NO" }.to_string()),
        "CLUB" => single(log.club.clone()),
        "NAME" => single(log.name.clone()),
        "EMAIL" => single(log.email.clone()),
        "ADDRESS" => multiline_rows(tag, &log.address.text),
        "ADDRESS-CITY" => single(log.address.city.clone()),
        "ADDRESS-STATE-PROVINCE" => single(log.address.state_province.clone()),
        "ADDRESS-POSTALCODE" => single(log.address.postalcode.clone()),
        "ADDRESS-COUNTRY" => single(log.address.country.clone()),
        "SOAPBOX" => multiline_rows(tag, &log.soapbox),
        "DEBUG" => single(if log.debug == 0 {
            String::new()
        } else {
            log.debug.to_string()
        }),
        _ => multiline_rows(tag, log.custom.get(tag).map_or("", String::as_str)),
    }
}

// One row per wrapped segment of each `\n`-separated line.
fn multiline_rows<'a>(tag: &'a Tag, value: &str) -> Vec<Row<'a>> {
    value
        .split('\n')
        .flat_map(|line| wrapped_rows(tag, line))
        .collect()
}

fn wrapped_rows<'a>(tag: &'a Tag, value: &str) -> Vec<Row<'a>> {
    wrap(value, value_budget(tag.as_str()))
        .into_iter()
        .map(|segment| Row {
            tag,
            value: segment.to_string(),
        })
        .collect()
}

fn token<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

// `@HOST` first, then every other operator in order.
fn operators_value(log: &Log) -> String {
    let host = (!log.host.is_empty()).then(|| format!("@{}", log.host));
    host.into_iter()
        .chain(
            log.operators
                .iter()
                .filter(|op| **op != log.host)
                .map(Callsign::to_string),
        )
        .collect::<Vec<_>>()
        .join(", ")
}

fn offtime_value(offtime: &Offtime) -> String {
    match (offtime.begin, offtime.end) {
        (Some(begin), Some(end)) => format!(
            "{} {}",
            format_timestamp(Some(begin)),
            format_timestamp(Some(end))
        ),
        _ => String::new(),
    }
}
