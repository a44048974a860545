mod home;
pub use home::Home;

mod publications;
pub use publications::{AddPublication, AddPublicationDraft, Publications};

mod session;
pub use session::{Login, Register};
