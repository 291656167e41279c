pub mod use_route;
pub mod use_surveys;
