pub mod confidence_bar;
pub mod score_list;
