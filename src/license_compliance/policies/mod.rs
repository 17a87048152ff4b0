mod deny_list;

pub use deny_list::DenyList;
