fn main() {
    campaign_prs::app::cli::run();
}
