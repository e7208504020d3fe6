pub mod history_service;
pub mod unit_of_work;

pub use history_service::HistoryService;
pub use unit_of_work::AppUnitOfWork;
