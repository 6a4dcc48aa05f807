//! Concurrent bookings against shared showings.

#![allow(clippy::unwrap_used, clippy::panic)]

use chrono::NaiveDate;
use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;
use theater::aggregates::Theater;
use theater::lineup::{daily_lineup, default_catalog};
use theater::types::Customer;
use theater::TheaterError;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 4).unwrap()
}

fn theater() -> Theater {
    let mut theater = Theater::new();
    theater.insert_lineup(today(), daily_lineup(&default_catalog().unwrap(), today()).unwrap());
    theater
}

#[test]
fn test_last_seat_is_sold_once() {
    let theater = theater();
    let booked = AtomicU32::new(0);
    let rejected = AtomicU32::new(0);

    thread::scope(|scope| {
        for worker in 0..16 {
            let theater = &theater;
            let booked = &booked;
            let rejected = &rejected;
            scope.spawn(move || {
                let customer = Customer::new(format!("customer-{worker}"), worker.to_string()).unwrap();
                for _ in 0..20 {
                    match theater.reserve(customer.clone(), today(), 5, 1, today()) {
                        Ok(_) => {
                            booked.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(TheaterError::CapacityExceeded { .. }) => {
                            rejected.fetch_add(1, Ordering::Relaxed);
                        }
                        Err(other) => panic!("unexpected error: {other}"),
                    }
                }
            });
        }
    });

    assert_eq!(booked.load(Ordering::Relaxed), 100);
    assert_eq!(rejected.load(Ordering::Relaxed), 16 * 20 - 100);
    assert_eq!(theater.showing(today(), 5).unwrap().seats_left(), 0);
}

#[test]
fn test_clones_across_threads_share_inventory() {
    let theater = theater();

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let theater = theater.clone();
            thread::spawn(move || {
                let customer = Customer::new("Worker", worker.to_string()).unwrap();
                theater.reserve(customer, today(), 1, 10, today()).unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(theater.showing(today(), 1).unwrap().seats_left(), 60);
    assert_eq!(theater.showing(today(), 2).unwrap().seats_left(), 100);
}
