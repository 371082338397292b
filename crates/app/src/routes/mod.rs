pub mod contact;
pub mod not_found;
pub mod privacy;

use dioxus::prelude::*;
use shared_types::ContactQuery;

use contact::Contact;
use not_found::NotFound;
use privacy::Privacy;

/// Site routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/?:..query", Contact)]
    Home { query: ContactQuery },
    #[route("/contact?:..query")]
    Contact { query: ContactQuery },
    #[route("/privacy-policy")]
    Privacy {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}
