pub mod update_prs;
