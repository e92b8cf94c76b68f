mod console_presenter;
mod disk_result_writer;
mod remote_processing_service;

pub use console_presenter::ConsolePresenter;
pub use disk_result_writer::DiskResultWriter;
pub use remote_processing_service::RemoteProcessingService;
