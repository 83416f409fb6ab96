pub mod alert;
pub mod chat;
pub mod destination;
pub mod itinerary;
pub mod review;
pub mod scraped_content;
pub mod spot;
