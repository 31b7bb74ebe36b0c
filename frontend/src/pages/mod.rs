pub mod demo_page;
