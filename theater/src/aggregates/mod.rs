//! Domain aggregates: movies, showings, reservations and the theater schedule.

pub mod booking;
pub mod movie;
pub mod reservation;
pub mod showing;
pub mod theater;

pub use booking::{TheaterAction, TheaterEnvironment, TheaterReducer, TheaterState};
pub use movie::{Movie, SPECIAL_CODE};
pub use reservation::Reservation;
pub use showing::{Discount, DiscountKind, Showing};
pub use theater::Theater;
