//! Plain-text rendering of the form and the submission list.

use crate::controller::ContactFormController;
use crate::domain::Field;
use crate::form::FormState;
use crate::models::ContactRecord;
use std::fmt;

/// Renders each input as `Label: value`, with its error underneath.
pub struct FormView<'a>(pub &'a FormState);

impl fmt::Display for FormView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for field in Field::ALL {
            let value = self.0.draft().get(field);
            if value.is_empty() {
                writeln!(f, "{}: <{}>", field.label(), field.placeholder())?;
            } else if field.is_multiline() {
                writeln!(f, "{}:", field.label())?;
                for line in value.lines() {
                    writeln!(f, "    {}", line)?;
                }
            } else {
                writeln!(f, "{}: {}", field.label(), value)?;
            }

            if let Some(error) = self.0.error(field) {
                writeln!(f, "  ! {}", error)?;
            }
        }
        Ok(())
    }
}

/// One submission as a card.
pub struct RecordCard<'a>(pub &'a ContactRecord);

impl fmt::Display for RecordCard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        writeln!(f, "{} {}", record.first_name, record.last_name)?;
        writeln!(f, "  Email: {}", record.email)?;
        writeln!(f, "  Phone: {}", record.phone)?;
        writeln!(f, "  Address: {}", record.address)
    }
}

/// What the list area below the form shows.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmissionListView<'a> {
    Loading,
    Empty,
    Records(&'a [ContactRecord]),
}

impl<'a> SubmissionListView<'a> {
    pub fn of(controller: &'a ContactFormController) -> Self {
        if controller.is_loading() {
            SubmissionListView::Loading
        } else if controller.records().is_empty() {
            SubmissionListView::Empty
        } else {
            SubmissionListView::Records(controller.records())
        }
    }
}

impl fmt::Display for SubmissionListView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionListView::Loading => writeln!(f, "Loading..."),
            SubmissionListView::Empty => writeln!(f, "No data submitted yet."),
            SubmissionListView::Records(records) => {
                for (i, record) in records.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{}", RecordCard(record))?;
                }
                Ok(())
            }
        }
    }
}
