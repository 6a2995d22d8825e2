use common::error::ClientError;
use common::resource::{Attachment, FormMode, Listing};

pub enum Msg<R> {
    Load,
    Loaded(Result<Listing<R>, ClientError>),
    /// Row 0 is the form itself; later rows only exist on batch forms.
    SetValue { row: usize, field: String, value: String },
    AddRow,
    RemoveRow(usize),
    FilesChosen { field: String, files: Vec<web_sys::File> },
    FilesRead { field: String, files: Vec<Attachment> },
    Submit,
    Submitted { mode: FormMode, result: Result<(), ClientError> },
    Edit(String),
    Reset,
    Remove(String),
    Removed { id: String, result: Result<(), ClientError> },
    RemovePageImage,
    PageImageRemoved(Result<(), ClientError>),
    View(String),
    Viewed { id: String, result: Result<R, ClientError> },
    CloseDetail,
    SearchField(String),
    SearchText(String),
    GoToPage(usize),
    Export,
}
