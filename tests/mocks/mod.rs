pub mod mock_contact_api;
pub mod recording_notifier;

#[allow(unused_imports)]
pub use mock_contact_api::MockContactApi;
#[allow(unused_imports)]
pub use recording_notifier::RecordingNotifier;
