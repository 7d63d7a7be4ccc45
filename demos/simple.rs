use company_search::CompanyRepository;

fn main() {
    env_logger::init();

    let company_repository =
        CompanyRepository::from_embedded_dataset().expect("Failed to load embedded dataset");

    let query = "Berkshire Hathway";

    println!("Companies matching \"{}\"", query);
    for (company, score) in company_repository.search_with_scores(query, 5) {
        println!(
            "{:>8} {:<6} {:<8} {} ({:.4})",
            company.cik, company.ticker, company.exchange, company.name, score
        );
    }
}
