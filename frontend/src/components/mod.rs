pub mod home;
pub mod link;
pub mod survey_view;
