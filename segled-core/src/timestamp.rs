//! ISO-8601 timestamp parsing
//!
//! Telemetry time values arrive as `YYYY-MM-DDTHH:MM:SSZ` strings. Only the
//! calendar and clock fields are extracted; the parser is deliberately
//! lenient about everything after the seconds:
//!
//! - fractional seconds are truncated (`06.750` → 6)
//! - the `Z` designator and any UTC offset are ignored
//! - fields may have any number of digits, like `%d` in scanf
//!
//! Field values are not range checked. A structurally broken string is
//! reported as an error rather than yielding partially filled fields.

/// Timestamp fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// `YYYY`, optionally signed
    Year,
    /// `MM`
    Month,
    /// `DD`
    Day,
    /// `HH`
    Hour,
    /// `MM` after the date separator
    Minute,
    /// `SS`, fraction excluded
    Second,
}

/// Errors from timestamp parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimestampError {
    /// Input was empty
    Empty,
    /// A field is missing, has no digits, or its separator is wrong
    Malformed(Field),
    /// A field does not fit in 32 bits
    Overflow(Field),
}

/// Parsed timestamp fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timestamp {
    /// Calendar year
    pub year: i32,
    /// Month as written, not checked against 1-12
    pub month: u32,
    /// Day of month as written
    pub day: u32,
    /// Hour as written, not checked against 0-23
    pub hour: u32,
    /// Minute as written
    pub minute: u32,
    /// Whole seconds
    pub second: u32,
}

impl Timestamp {
    /// Parse an ISO-8601 `YYYY-MM-DDTHH:MM:SS` timestamp
    pub fn parse(text: &str) -> Result<Self, TimestampError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TimestampError::Empty);
        }

        let mut cursor = Cursor::new(text.as_bytes());

        let year = cursor.signed(Field::Year)?;
        cursor.expect(b'-', Field::Month)?;
        let month = cursor.digits(Field::Month)?;
        cursor.expect(b'-', Field::Day)?;
        let day = cursor.digits(Field::Day)?;
        cursor.expect_any(b"Tt ", Field::Hour)?;
        let hour = cursor.digits(Field::Hour)?;
        cursor.expect(b':', Field::Minute)?;
        let minute = cursor.digits(Field::Minute)?;
        cursor.expect(b':', Field::Second)?;
        let second = cursor.digits(Field::Second)?;

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }
}

/// Byte cursor over the input
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn expect(&mut self, separator: u8, field: Field) -> Result<(), TimestampError> {
        self.expect_any(&[separator], field)
    }

    fn expect_any(&mut self, separators: &[u8], field: Field) -> Result<(), TimestampError> {
        match self.peek() {
            Some(b) if separators.contains(&b) => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(TimestampError::Malformed(field)),
        }
    }

    /// Run of decimal digits as u32
    fn digits(&mut self, field: Field) -> Result<u32, TimestampError> {
        let start = self.pos;
        let mut value: u32 = 0;
        while let Some(b @ b'0'..=b'9') = self.peek() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add((b - b'0') as u32))
                .ok_or(TimestampError::Overflow(field))?;
            self.pos += 1;
        }
        if self.pos == start {
            return Err(TimestampError::Malformed(field));
        }
        Ok(value)
    }

    fn signed(&mut self, field: Field) -> Result<i32, TimestampError> {
        let negative = match self.peek() {
            Some(b'-') => {
                self.pos += 1;
                true
            }
            Some(b'+') => {
                self.pos += 1;
                false
            }
            _ => false,
        };
        let value =
            i32::try_from(self.digits(field)?).map_err(|_| TimestampError::Overflow(field))?;
        Ok(if negative { -value } else { value })
    }
}
