mod page;
mod pagination;

pub use page::parse_page;
pub use pagination::find_next_link;
