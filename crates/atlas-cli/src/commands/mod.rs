pub mod dispatch;
pub mod fav;
pub mod menu;
pub mod nav;
pub mod resolve;
pub mod routes;
pub mod schema;
pub mod shared;
