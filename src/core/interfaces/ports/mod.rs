mod result_writer;
mod upload_presenter;

pub use result_writer::ResultWriter;
pub use upload_presenter::UploadPresenter;
