//! Ticket booking commands

use super::require_user;
use crate::error::{FanConnectError, Result};
use crate::store::{Booking, LeagueDatabase, MatchId, Role};

pub fn handle_book(db: &mut LeagueDatabase, match_id: MatchId, tickets: u32) -> Result<()> {
    let user = require_user(db)?;
    let booking = db.add_booking(match_id, user.id, tickets)?;
    println!(
        "✓ Booked {} ticket(s) for match {}, total ₹{}",
        booking.tickets, booking.match_id, booking.total_amount
    );
    Ok(())
}

pub fn handle_bookings(db: &LeagueDatabase, all: bool) -> Result<()> {
    let bookings = if all {
        let user = require_user(db)?;
        if user.role != Role::Admin {
            return Err(FanConnectError::Forbidden {
                role: Role::Admin.to_string(),
            });
        }
        db.bookings()?
    } else {
        let user = require_user(db)?;
        db.bookings_by_user(user.id)?
    };

    if bookings.is_empty() {
        println!("No bookings found");
        return Ok(());
    }

    for booking in &bookings {
        print_booking(booking);
    }

    let revenue: u32 = bookings.iter().map(|b| b.total_amount).sum();
    let tickets: u32 = bookings.iter().map(|b| b.tickets).sum();
    println!("{} booking(s), {} ticket(s), ₹{} total", bookings.len(), tickets, revenue);
    Ok(())
}

fn print_booking(booking: &Booking) {
    println!(
        "{:<4} match {:<4} {:>2} ticket(s) ₹{:<6} {} ({})",
        booking.id,
        booking.match_id,
        booking.tickets,
        booking.total_amount,
        booking.booking_date.format("%Y-%m-%d"),
        booking.status
    );
}
