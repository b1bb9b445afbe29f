mod cvs_author_reported_verbatim;
mod cvs_dates_shifted_by_zone_offset;
mod cvs_latin1_log_is_reported;
mod cvs_malformed_date_is_skipped;
mod empty_input_produces_empty_report;
mod report_is_identical_across_runs;
mod report_read_from_file;
mod svn_malformed_xml_fails;
