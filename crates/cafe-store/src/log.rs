//! # Durable Order Log
//!
//! Every finalized order is written as one text block to `orders.txt`.
//! The file is append-only and never parsed back. A block cut short by
//! a failed write ends with `-- record incomplete --`.
//!
//! ## Record Layout
//! ```text
//! Order ID: 1001
//! Customer: Ayesha
//! Time: 2026-10-14 13:05:22
//! Items:
//!   - Chocolate Dream x2 @ Rs.100.00
//! Subtotal: Rs.200.00
//! Tax: Rs.26.00
//! Donation: Rs.0.00
//! Total: Rs.226.00
//! Payment: Cash
//! Status: Paid
//! ----------------------------------------
//! ```

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use cafe_core::{Currency, Order};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// Timestamp format shared by the order log and the feedback log.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of the dashed line closing each record.
const RECORD_SEPARATOR_WIDTH: usize = 40;

/// Closes a record whose write failed partway, so readers of the file can
/// tell it apart from a real order.
pub const INCOMPLETE_MARKER: &str = "-- record incomplete --";

/// Where finalized orders are made durable.
///
/// `append` must either make the whole record durable or return an error;
/// the store relies on this to keep memory and disk in agreement.
pub trait OrderLog {
    fn append(&mut self, order: &Order) -> StoreResult<()>;
}

/// Renders one log record, newline-terminated.
pub fn format_record(order: &Order, currency: &Currency) -> String {
    let totals = order.totals();
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "Order ID: {}", order.id());
    let _ = writeln!(out, "Customer: {}", order.customer_name());
    let _ = writeln!(out, "Time: {}", order.created_at_local().format(TIMESTAMP_FORMAT));
    let _ = writeln!(out, "Items:");
    for item in order.items() {
        let _ = writeln!(
            out,
            "  - {} x{} @ {}",
            item.name,
            item.quantity,
            currency.format(item.unit_price())
        );
    }
    let _ = writeln!(out, "Subtotal: {}", currency.format(totals.subtotal));
    let _ = writeln!(out, "Tax: {}", currency.format(totals.tax));
    let _ = writeln!(out, "Donation: {}", currency.format(totals.donation));
    let _ = writeln!(out, "Total: {}", currency.format(totals.total));
    let _ = writeln!(out, "Payment: {}", order.payment_method());
    let _ = writeln!(out, "Status: {}", order.status());
    let _ = writeln!(out, "{}", "-".repeat(RECORD_SEPARATOR_WIDTH));

    out
}

// =============================================================================
// File Log
// =============================================================================

/// Appends records to a text file, creating it on first use.
#[derive(Debug, Clone)]
pub struct FileOrderLog {
    path: PathBuf,
    currency: Currency,
}

impl FileOrderLog {
    pub fn new(path: impl Into<PathBuf>, currency: Currency) -> Self {
        FileOrderLog {
            path: path.into(),
            currency,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderLog for FileOrderLog {
    /// Opens in append mode, writes the block in one call, then flushes
    /// and syncs before reporting success.
    fn append(&mut self, order: &Order) -> StoreResult<()> {
        let record = format_record(order, &self.currency);
        let fail = |e| StoreError::persistence(&self.path, e);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(fail)?;
        write_record(&mut file, &record).map_err(fail)?;
        file.flush().map_err(fail)?;
        file.sync_data().map_err(fail)?;

        debug!(order_id = %order.id(), path = %self.path.display(), "Order record written");
        Ok(())
    }
}

/// Writes `record`; if that fails, tries to close the partial block with
/// [`INCOMPLETE_MARKER`] and returns the original error.
fn write_record<W: Write>(out: &mut W, record: &str) -> io::Result<()> {
    if let Err(e) = out.write_all(record.as_bytes()) {
        if out.write_all(format!("\n{INCOMPLETE_MARKER}\n").as_bytes()).is_err() {
            warn!(error = %e, "Partial order record left unmarked");
        }
        return Err(e);
    }
    Ok(())
}

// =============================================================================
// Memory Log
// =============================================================================

/// Keeps rendered records in memory. Used where no file should be touched.
#[derive(Debug, Clone, Default)]
pub struct MemoryOrderLog {
    currency: Currency,
    records: Vec<String>,
}

impl MemoryOrderLog {
    pub fn new(currency: Currency) -> Self {
        MemoryOrderLog {
            currency,
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[String] {
        &self.records
    }
}

impl OrderLog for MemoryOrderLog {
    fn append(&mut self, order: &Order) -> StoreResult<()> {
        self.records.push(format_record(order, &self.currency));
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cafe_core::{Donation, MenuCatalog, OrderBuilder, OrderId, PaymentMethod, PricingEngine};
    use chrono::{Local, TimeZone, Utc};

    fn sample_order() -> Order {
        let catalog = MenuCatalog::rukaab_default();
        let created = Local
            .with_ymd_and_hms(2026, 10, 14, 13, 5, 22)
            .single()
            .unwrap()
            .with_timezone(&Utc);

        let mut builder = OrderBuilder::new(&catalog);
        builder.start_order(OrderId::new(1001), "Ayesha", created).unwrap();
        builder.add_line_item(1, 2).unwrap();
        builder.choose_variant(1).unwrap();
        builder.choose_topping(3).unwrap();
        builder.finish_items().unwrap();
        builder
            .finalize(&PricingEngine::default(), Donation::Declined, PaymentMethod::Cash)
            .unwrap()
    }

    #[test]
    fn test_format_record() {
        let record = format_record(&sample_order(), &Currency::default());
        let expected = "\
Order ID: 1001
Customer: Ayesha
Time: 2026-10-14 13:05:22
Items:
  - Chocolate Dream x2 @ Rs.100.00
Subtotal: Rs.200.00
Tax: Rs.26.00
Donation: Rs.0.00
Total: Rs.226.00
Payment: Cash
Status: Paid
----------------------------------------
";
        assert_eq!(record, expected);
    }

    /// Accepts `budget` bytes, fails once, then accepts everything.
    struct ShortWriter {
        written: Vec<u8>,
        budget: usize,
        failed: bool,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.failed {
                self.written.extend_from_slice(buf);
                return Ok(buf.len());
            }
            if self.budget == 0 {
                self.failed = true;
                return Err(io::Error::other("disk full"));
            }
            let n = buf.len().min(self.budget);
            self.budget -= n;
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_partial_write_is_marked_incomplete() {
        let record = format_record(&sample_order(), &Currency::default());
        let mut out = ShortWriter {
            written: Vec::new(),
            budget: 40,
            failed: false,
        };

        let err = write_record(&mut out, &record).unwrap_err();
        assert_eq!(err.to_string(), "disk full");

        let written = String::from_utf8(out.written).unwrap();
        assert!(written.starts_with("Order ID: 1001\nCustomer: Ayesha"));
        assert!(!written.contains("Status: Paid"));
        assert!(written.ends_with("\n-- record incomplete --\n"));
    }

    #[test]
    fn test_complete_write_has_no_marker() {
        let record = format_record(&sample_order(), &Currency::default());
        let mut out = Vec::new();
        write_record(&mut out, &record).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), record);
    }

    #[test]
    fn test_file_log_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.txt");
        let mut log = FileOrderLog::new(&path, Currency::default());

        log.append(&sample_order()).unwrap();
        log.append(&sample_order()).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("Order ID: 1001").count(), 2);
        assert!(contents.ends_with("----------------------------------------\n"));
    }

    #[test]
    fn test_file_log_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone").join("orders.txt");
        let mut log = FileOrderLog::new(&path, Currency::default());

        let err = log.append(&sample_order()).unwrap_err();
        assert!(matches!(err, StoreError::PersistenceFailure { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_memory_log() {
        let mut log = MemoryOrderLog::new(Currency::default());
        log.append(&sample_order()).unwrap();
        assert_eq!(log.records().len(), 1);
        assert!(log.records()[0].contains("Total: Rs.226.00"));
    }
}
