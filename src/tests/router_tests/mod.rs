mod export_tests;
mod page_tests;
mod sort_search_tests;
