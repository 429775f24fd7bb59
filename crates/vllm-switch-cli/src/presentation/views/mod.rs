mod endpoints;
mod health;
mod menu;

pub use endpoints::EndpointsView;
pub use health::HealthReportView;
pub use menu::MenuView;
