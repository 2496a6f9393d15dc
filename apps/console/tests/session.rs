//! Scripted console sessions: operator keystrokes in, screen text out.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use cafe_console::{AppConfig, AppContext, Console, PlainPresenter, Session};
use cafe_store::{FeedbackLog, FileOrderLog, OrderStore};
use tempfile::TempDir;

struct Outcome {
    screen: String,
    orders: usize,
}

fn run_script(data_dir: &Path, log_file: &str, script: &str) -> Outcome {
    let app = AppContext::from_config(AppConfig::default()).unwrap();
    let log = FileOrderLog::new(data_dir.join(log_file), app.currency.clone());
    let store = OrderStore::new(log, app.config.first_order_id());
    let feedback = FeedbackLog::new(data_dir.join("feedback.txt"));
    let console = Console::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        Box::new(PlainPresenter),
    );

    let mut session = Session::new(app, store, feedback, console);
    session.run().unwrap();

    let orders = session.store().order_count();
    let screen = String::from_utf8(session.into_console().into_output()).unwrap();
    Outcome { screen, orders }
}

#[test]
fn test_happy_path_order() {
    let tmp = TempDir::new().unwrap();
    // Ayesha: 2x Chocolate Dream, single scoop, caramel, no donation, cash.
    let out = run_script(tmp.path(), "orders.txt", "1\nAyesha\n1\n2\n1\n3\nn\nn\n1\n\n5\n");

    assert_eq!(out.orders, 1);
    assert!(out.screen.contains("RUKAAB CAFE MANAGEMENT SYSTEM"));
    assert!(out.screen.contains("Order #: 1001"));
    assert!(out.screen.contains("Customer: Ayesha"));
    assert!(out.screen.contains("   + Single Scoop"));
    assert!(out.screen.contains("   + Caramel"));
    assert!(out.screen.contains("Rs.226.00"));
    assert!(!out.screen.contains("Donation:"));
    assert!(out.screen.contains("Order #1001 completed."));
    assert!(out.screen.contains("Thank you for using Rukaab Cafe. Goodbye!"));

    let record = fs::read_to_string(tmp.path().join("orders.txt")).unwrap();
    assert!(record.contains("Order ID: 1001"));
    assert!(record.contains("  - Chocolate Dream x2 @ Rs.100.00"));
    assert!(record.contains("Tax: Rs.26.00"));
    assert!(record.contains("Total: Rs.226.00"));
    assert!(record.contains("Payment: Cash"));
    assert!(record.contains("Status: Paid"));
}

#[test]
fn test_invalid_answers_are_asked_again() {
    let tmp = TempDir::new().unwrap();
    let script = concat!(
        "9\n", "abc\n", "1\n", // bad menu option, not a number, then Place Order
        "Bilal\n",
        "0\n", "10\n", "xyz\n", "1\n", // item out of range twice, garbage, Chocolate Dream
        "0\n", "1\n", // quantity zero, then one
        "4\n", "1\n", // scoop out of range, then single
        "7\n", // No Topping
        "maybe\n", "n\n", // not yes/no, then no more items
        "y\n", // donate
        "4\n", "2\n", // payment out of range, then Card
        "\n", "5\n",
    );
    let out = run_script(tmp.path(), "orders.txt", script);

    assert_eq!(out.orders, 1);
    assert!(out.screen.contains("Invalid option 9: choose 1-5"));
    assert!(out.screen.contains("'abc' is not a number, please try again"));
    assert!(out.screen.contains("'xyz' is not a number, please try again"));
    assert!(out.screen.contains("Donation:"));
    assert!(out.screen.contains("Rs.213.00"));
    assert!(out.screen.contains("Payment: Card"));

    let record = fs::read_to_string(tmp.path().join("orders.txt")).unwrap();
    assert!(record.contains("Donation: Rs.100.00"));
    assert!(record.contains("Total: Rs.213.00"));
}

#[test]
fn test_end_of_input_mid_order_records_nothing() {
    let tmp = TempDir::new().unwrap();
    let out = run_script(tmp.path(), "orders.txt", "1\nSara\n1\n");

    assert_eq!(out.orders, 0);
    assert!(out.screen.contains("Goodbye!"));
    assert!(!tmp.path().join("orders.txt").exists());
}

#[test]
fn test_failed_save_is_not_counted() {
    let tmp = TempDir::new().unwrap();
    let out = run_script(
        tmp.path(),
        "missing/orders.txt",
        "1\nAyesha\n1\n2\n1\n3\nn\nn\n1\n\n3\n\n5\n",
    );

    assert_eq!(out.orders, 0);
    assert!(out.screen.contains("The order was NOT recorded. Please try again."));
    assert!(!out.screen.contains("Order #1001 completed."));
    assert!(out.screen.contains("Total Orders this session: 0"));
    assert!(out.screen.contains("Total Daily Revenue: Rs.0.00"));
}

#[test]
fn test_report_after_walk_in_order() {
    let tmp = TempDir::new().unwrap();
    // Blank name, Karak Chai masala, no toppings offered for beverages.
    let out = run_script(tmp.path(), "orders.txt", "1\n\n9\n1\n2\nn\nn\n1\n\n3\n\n5\n");

    assert_eq!(out.orders, 1);
    assert!(!out.screen.contains("Select topping"));
    assert!(out.screen.contains("Customer: Walk-in"));
    assert!(out.screen.contains("   + Masala"));
    assert!(out.screen.contains("Total Daily Revenue: Rs.113.00"));
    assert!(out.screen.contains("Total Orders this session: 1"));
    assert!(out.screen.contains("#1001"));
}

#[test]
fn test_consecutive_orders_get_sequential_ids() {
    let tmp = TempDir::new().unwrap();
    let order = "1\nAli\n9\n1\n1\nn\nn\n1\n\n";
    let out = run_script(tmp.path(), "orders.txt", &format!("{order}{order}5\n"));

    assert_eq!(out.orders, 2);
    assert!(out.screen.contains("Order #1001 completed."));
    assert!(out.screen.contains("Order #1002 completed."));

    let record = fs::read_to_string(tmp.path().join("orders.txt")).unwrap();
    assert!(record.find("Order ID: 1001").unwrap() < record.find("Order ID: 1002").unwrap());
}

#[test]
fn test_zero_cancels_item_being_customized() {
    let tmp = TempDir::new().unwrap();
    let script = concat!(
        "1\n", "Zara\n",
        "1\n", "1\n", "0\n", // Chocolate Dream, cancelled at the scoop prompt
        "2\n", "1\n", "2\n", "0\n", // Vanilla Bliss, cancelled at the topping prompt
        "9\n", "1\n", "1\n", // Karak Chai, regular
        "n\n", "n\n", "1\n", "\n", "5\n",
    );
    let out = run_script(tmp.path(), "orders.txt", script);

    assert_eq!(out.orders, 1);
    assert_eq!(out.screen.matches("Item cancelled.").count(), 2);
    assert!(out.screen.contains("Choice (0 to cancel item): "));
    assert!(out.screen.contains("Rs.113.00"));

    let record = fs::read_to_string(tmp.path().join("orders.txt")).unwrap();
    assert!(record.contains("  - Karak Chai x1 @ Rs.100.00"));
    assert!(!record.contains("Chocolate Dream"));
    assert!(!record.contains("Vanilla Bliss"));
}

#[test]
fn test_view_menu() {
    let tmp = TempDir::new().unwrap();
    let out = run_script(tmp.path(), "orders.txt", "2\n\n5\n");

    assert!(out.screen.contains("--- Ice Cream ---"));
    assert!(out.screen.contains("--- Beverages ---"));
    assert!(out.screen.contains("Rukaab Brownie"));
    assert!(out.screen.contains("Rs.300.00"));
    assert!(out.screen.contains("Oreo Crumbles"));
}

#[test]
fn test_feedback_give_then_view() {
    let tmp = TempDir::new().unwrap();
    let out = run_script(
        tmp.path(),
        "orders.txt",
        "4\n2\n\n4\n1\nAyesha\nGreat shakes\n\n4\n1\n\n   \n\n4\n2\n\n5\n",
    );

    assert!(out.screen.contains("No feedback found."));
    assert!(out.screen.contains("Thank you for your feedback!"));
    assert!(out.screen.contains("Feedback is empty, nothing saved."));
    assert!(out.screen.contains("--- Feedback ---"));

    let saved = fs::read_to_string(tmp.path().join("feedback.txt")).unwrap();
    assert_eq!(saved.lines().count(), 1);
    assert!(saved.contains("Ayesha"));
    assert!(saved.contains("Great shakes"));
}
