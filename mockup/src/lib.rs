//! Call-recording mocks for rust traits.
//!
//! A mock records every call made through a mocked trait, serves stubbed
//! results registered with [`when!`], and lets a test assert afterwards
//! which calls happened with [`invoked!`], optionally in order using a
//! [`Sequence`].

extern crate self as mockup;

pub mod action;
pub mod error;
pub mod matcher;
pub mod member;
pub mod method;
pub mod misc;
pub mod mockable;
pub mod output;
pub mod reference;
pub mod sequence;
pub mod state;

pub use mockup_macros::{invoked, mock, when};

pub use action::{invoke, return_, throw_, Action};
pub use error::Error;
pub use matcher::Matcher;
pub use member::{Member, When};
pub use method::Method;
pub use misc::{next_mock_id, next_order};
pub use mockable::{Mockable, MockableDefault, Mocked};
pub use output::OutputSlot;
pub use reference::Ref;
pub use sequence::Sequence;
pub use state::MockState;
