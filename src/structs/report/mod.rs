pub mod parsed_item;
pub mod parsed_section;
pub mod parsed_report;
pub mod recommendation;
pub mod category_score;
pub mod category_scores;
pub mod analysis_result;
pub mod report_section;
pub mod report_data;
pub mod report_summary;
