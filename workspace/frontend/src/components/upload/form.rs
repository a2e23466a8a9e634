use common::UPLOAD_FIELD;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

/// `accept` attribute of the file input. A hint to the picker only.
pub const CSV_ACCEPT: &str = ".csv";

/// Value carried by the `file` field of the upload form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormField<F> {
    File(F),
    /// Nothing was picked; the field is still sent, with an empty value
    Empty,
}

impl<F> From<Option<F>> for FormField<F> {
    fn from(selection: Option<F>) -> Self {
        match selection {
            Some(file) => FormField::File(file),
            None => FormField::Empty,
        }
    }
}

impl<F> FormField<F> {
    pub fn is_empty(&self) -> bool {
        matches!(self, FormField::Empty)
    }
}

fn js_error(e: JsValue) -> String {
    format!("Failed to build upload form: {:?}", e)
}

/// Name and value of the single entry a form carries. `None` means the
/// entry is sent with an empty string value.
pub fn form_entry<F>(field: &FormField<F>) -> (&'static str, Option<&F>) {
    match field {
        FormField::File(file) => (UPLOAD_FIELD, Some(file)),
        FormField::Empty => (UPLOAD_FIELD, None),
    }
}

/// Hands the current selection to `send`, whether or not a file was picked.
pub fn submit<F, S>(selection: Option<F>, send: S)
where
    S: FnOnce(FormField<F>),
{
    send(FormField::from(selection));
}

/// Multipart body with exactly one `file` field.
pub fn build_form_data(field: &FormField<File>) -> Result<FormData, String> {
    let form = FormData::new().map_err(js_error)?;
    match form_entry(field) {
        (name, Some(file)) => form
            .append_with_blob_and_filename(name, file, &file.name())
            .map_err(js_error)?,
        (name, None) => form.append_with_str(name, "").map_err(js_error)?,
    }
    Ok(form)
}
