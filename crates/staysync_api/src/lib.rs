// --- File: crates/staysync_api/src/lib.rs ---
// Declare modules within this crate
pub mod auth;
pub mod client;
pub mod error;
pub mod hotel;
pub mod reservation;
pub mod room;
pub mod user;

pub use auth::AuthService;
pub use client::ApiClient;
pub use error::ApiError;
pub use hotel::HotelService;
pub use reservation::ReservationService;
pub use room::RoomService;
pub use user::UserService;
