mod fetch;

pub use fetch::FetchService;
