// Adapters layer: HTTP clients for the job boards.

pub mod headhunter;
pub mod http;
pub mod superjob;

pub use headhunter::HeadHunterProvider;
pub use superjob::SuperJobProvider;
