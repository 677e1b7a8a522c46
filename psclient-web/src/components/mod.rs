pub mod highlighted_name;
pub mod popup_wrapper;
pub mod popups;
pub mod search_results;
