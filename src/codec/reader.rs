use std::io::{BufRead, BufReader, Read};
use std::ops::ControlFlow;

use tracing::{debug, warn};

use super::error::CabrilloError;
use super::timestamp::parse_timestamp;
use crate::model::{
    Callsign, CategoryAssisted, CategoryBand, CategoryMode, CategoryOperator, CategoryOverlay,
    CategoryPower, CategoryStation, CategoryTime, CategoryTransmitter, Frequency, Locator, Log,
    Offtime, Qso, QsoInfo, QsoMode, Tag,
};

/// Why a line was left out of the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A `QSO:` or `X-QSO:` line without date, time and both callsigns.
    ShortQso { tokens: usize },
    /// The part before the colon is not a tag.
    InvalidTag,
}

/// A line the reader dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line_number: usize,
    pub line: String,
    pub reason: SkipReason,
}

/// A `QSO:` or `X-QSO:` line that was read, but whose stations could not be
/// split evenly.
///
/// An odd number of station tokens without a trailing transmitter number
/// gives the extra token to the received side. Writing such a QSO with a
/// transmitter number does not read back the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousQso {
    /// 1-based line number in the input.
    pub line_number: usize,
    pub line: String,
    /// Number of tokens after date and time.
    pub tokens: usize,
}

/// The result of [`read_with_report`]: the log, the lines that did not make
/// it in, and the QSOs that were split by guesswork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadReport {
    pub log: Log,
    pub skipped: Vec<SkippedLine>,
    pub ambiguous_qsos: Vec<AmbiguousQso>,
}

/// Reads a Cabrillo log from `reader`.
///
/// Reading stops at `END-OF-LOG` or at end of input. Malformed values fall
/// back to defaults and unparseable lines are skipped, so the only possible
/// error is an I/O failure.
pub fn read<R: Read>(reader: R) -> Result<Log, CabrilloError> {
    Ok(read_with_report(reader)?.log)
}

/// Reads a Cabrillo log like [`read`], also reporting every skipped line and
/// every ambiguous QSO.
pub fn read_with_report<R: Read>(reader: R) -> Result<ReadReport, CabrilloError> {
    let mut reader = BufReader::new(reader);
    let mut parser = LogParser::default();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;
        let line = String::from_utf8_lossy(&buf);
        if parser.parse_line(line_number, &line).is_break() {
            break;
        }
    }

    debug!(
        qsos = parser.log.qso_data.len(),
        ignored_qsos = parser.log.ignored_qsos.len(),
        custom = parser.log.custom.len(),
        skipped = parser.skipped.len(),
        ambiguous_qsos = parser.ambiguous_qsos.len(),
        "read cabrillo log"
    );
    Ok(ReadReport {
        log: parser.log,
        skipped: parser.skipped,
        ambiguous_qsos: parser.ambiguous_qsos,
    })
}

#[derive(Default)]
struct LogParser {
    log: Log,
    skipped: Vec<SkippedLine>,
    ambiguous_qsos: Vec<AmbiguousQso>,
}

impl LogParser {
    fn parse_line(&mut self, line_number: usize, line: &str) -> ControlFlow<()> {
        let line = if line_number == 1 {
            line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line)
        } else {
            line
        };
        let trimmed = line.trim_matches(|c: char| c.is_ascii_whitespace());
        let Some((raw_tag, value)) = trimmed.split_once(':') else {
            if trimmed.eq_ignore_ascii_case(Tag::END_OF_LOG.as_str()) {
                return ControlFlow::Break(());
            }
            return ControlFlow::Continue(());
        };

        if !is_tag(raw_tag.trim()) {
            warn!(line_number, line = trimmed, "skipping line without a valid tag");
            self.skip(line_number, trimmed, SkipReason::InvalidTag);
            return ControlFlow::Continue(());
        }

        let tag = Tag::new(raw_tag);
        let value = value.trim_matches(|c: char| c.is_ascii_whitespace());
        self.apply(line_number, trimmed, tag, value)
    }

    fn apply(&mut self, line_number: usize, line: &str, tag: Tag, value: &str) -> ControlFlow<()> {
        let log = &mut self.log;
        match tag.as_str() {
            "START-OF-LOG" => {
                if !value.is_empty() {
                    log.cabrillo_version = value.to_string();
                }
            }
            "END-OF-LOG" => return ControlFlow::Break(()),
            "CALLSIGN" => log.callsign = Callsign::new(value),
            "CONTEST" => log.contest = value.to_string(),
            "CATEGORY-ASSISTED" => log.category.assisted = token(value, CategoryAssisted::parse),
            "CATEGORY-BAND" => log.category.band = token(value, CategoryBand::parse),
            "CATEGORY-MODE" => log.category.mode = token(value, CategoryMode::parse),
            "CATEGORY-OPERATOR" => log.category.operator = token(value, CategoryOperator::parse),
            "CATEGORY-POWER" => log.category.power = token(value, CategoryPower::parse),
            "CATEGORY-STATION" => log.category.station = token(value, CategoryStation::parse),
            "CATEGORY-TIME" => log.category.time = token(value, CategoryTime::parse),
            "CATEGORY-TRANSMITTER" => {
                log.category.transmitter = token(value, CategoryTransmitter::parse)
            }
            "CATEGORY-OVERLAY" => log.category.overlay = token(value, CategoryOverlay::parse),
            "CERTIFICATE" => log.certificate = value.eq_ignore_ascii_case("YES"),
            "CLAIMED-SCORE" => log.claimed_score = value.parse().unwrap_or(0),
            "CLUB" => log.club = value.to_string(),
            "CREATED-BY" => log.created_by = value.to_string(),
            "EMAIL" => log.email = value.to_string(),
            "GRID-LOCATOR" => log.grid_locator = Locator::new(value),
            "LOCATION" => log.location = value.to_string(),
            "NAME" => log.name = value.to_string(),
            "ADDRESS" => append_line(&mut log.address.text, value),
            "ADDRESS-CITY" => log.address.city = value.to_string(),
            "ADDRESS-STATE-PROVINCE" => log.address.state_province = value.to_string(),
            "ADDRESS-POSTALCODE" => log.address.postalcode = value.to_string(),
            "ADDRESS-COUNTRY" => log.address.country = value.to_string(),
            "OPERATORS" => parse_operators(log, value),
            "OFFTIME" => log.offtime = parse_offtime(value),
            "SOAPBOX" => append_line(&mut log.soapbox, value),
            "DEBUG" => log.debug = value.parse().unwrap_or(0),
            "QSO" | "X-QSO" => match parse_qso(value) {
                Ok(parsed) => {
                    if tag == Tag::QSO {
                        log.add_qso(parsed.qso);
                    } else {
                        log.add_ignored_qso(parsed.qso);
                    }
                    if let Some(tokens) = parsed.uneven_tokens {
                        warn!(line_number, line, tokens, "QSO stations split unevenly");
                        self.ambiguous_qsos.push(AmbiguousQso {
                            line_number,
                            line: line.to_string(),
                            tokens,
                        });
                    }
                }
                Err(reason) => {
                    warn!(line_number, line, ?reason, "skipping short QSO line");
                    self.skip(line_number, line, reason);
                }
            },
            _ => append_line(log.custom.entry(tag).or_default(), value),
        }
        ControlFlow::Continue(())
    }

    fn skip(&mut self, line_number: usize, line: &str, reason: SkipReason) {
        self.skipped.push(SkippedLine {
            line_number,
            line: line.to_string(),
            reason,
        });
    }
}

const BYTE_ORDER_MARK: char = '\u{feff}';

fn is_tag(tag: &str) -> bool {
    !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

fn token<T>(value: &str, parse: fn(&str) -> T) -> Option<T> {
    (!value.is_empty()).then(|| parse(value))
}

// Appends a continuation line; empty continuations are dropped.
fn append_line(target: &mut String, value: &str) {
    if value.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push('\n');
    }
    target.push_str(value);
}

fn parse_operators(log: &mut Log, value: &str) {
    let tokens = value
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|token| !token.is_empty());
    for token in tokens {
        let call = match token.strip_prefix('@') {
            Some(host) => {
                let host = Callsign::new(host);
                if !host.is_empty() {
                    log.host = host.clone();
                }
                host
            }
            None => Callsign::new(token),
        };
        if !call.is_empty() {
            log.operators.push(call);
        }
    }
}

// Both endpoints or neither: a half-parsed offtime is dropped.
fn parse_offtime(value: &str) -> Offtime {
    let tokens: Vec<&str> = value.split_ascii_whitespace().collect();
    let [begin_date, begin_time, end_date, end_time] = tokens.as_slice() else {
        return Offtime::default();
    };
    match (
        parse_timestamp(begin_date, begin_time),
        parse_timestamp(end_date, end_time),
    ) {
        (Some(begin), Some(end)) => Offtime::new(begin, end),
        _ => Offtime::default(),
    }
}

struct ParsedQso {
    qso: Qso,
    /// Post-timestamp token count when the stations could not be split evenly.
    uneven_tokens: Option<usize>,
}

/// Parses the value of a `QSO:` line.
///
/// After frequency, mode, date and time the remaining tokens belong to the
/// two stations. An odd count (of at least three) ending in an integer has a
/// transmitter number at the end. The rest is split in half, and when the
/// count is still odd the received side gets the extra token.
fn parse_qso(value: &str) -> Result<ParsedQso, SkipReason> {
    let tokens: Vec<&str> = value.split_ascii_whitespace().collect();
    let short = SkipReason::ShortQso {
        tokens: tokens.len(),
    };
    let [frequency, mode, date, time, rest @ ..] = tokens.as_slice() else {
        return Err(short);
    };
    let (stations, transmitter) = split_transmitter(rest);
    if stations.len() < 2 {
        return Err(short);
    }
    let (sent, received) = stations.split_at(stations.len() / 2);

    Ok(ParsedQso {
        qso: Qso {
            frequency: Frequency::new(*frequency),
            mode: QsoMode::parse(mode),
            timestamp: parse_timestamp(date, time),
            sent: qso_info(sent),
            received: qso_info(received),
            transmitter,
        },
        uneven_tokens: (stations.len() % 2 == 1).then_some(rest.len()),
    })
}

fn split_transmitter<'a>(tokens: &'a [&'a str]) -> (&'a [&'a str], i32) {
    if tokens.len() >= 3
        && tokens.len() % 2 == 1
        && let Some((last, stations)) = tokens.split_last()
        && let Ok(transmitter) = last.parse()
    {
        return (stations, transmitter);
    }
    (tokens, 0)
}

fn qso_info(tokens: &[&str]) -> QsoInfo {
    match tokens.split_first() {
        Some((call, exchange)) => QsoInfo::new(*call, exchange.iter().copied()),
        None => QsoInfo::default(),
    }
}
