use company_search::{Cik, CompanyRepository};
use std::{fs, path::Path};
pub mod constants;
use constants::TEST_COMPANIES_JSON_PATH;

/// Loads the fixture dataset shared by the integration tests.
pub fn load_test_company_repository() -> CompanyRepository {
    let json = fs::read_to_string(&*TEST_COMPANIES_JSON_PATH)
        .expect("Failed to read test companies file");

    CompanyRepository::from_json_str(&json).expect("Failed to load test companies")
}

// Helper function to get the value of the first line starting with `directive`
fn get_directive(file_path: &Path, directive: &str) -> Option<String> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content.lines().find_map(|line| {
        line.trim()
            .strip_prefix(directive)
            .map(|value| value.trim().to_string())
    })
}

// Helper function to get the query from the QUERY: line
pub fn get_query(file_path: &Path) -> String {
    get_directive(file_path, "QUERY:")
        .unwrap_or_else(|| panic!("{:?} - Missing QUERY: line", file_path))
}

// Helper function to get the optional limit from the LIMIT: line
pub fn get_limit(file_path: &Path) -> Option<usize> {
    get_directive(file_path, "LIMIT:").map(|limit| {
        limit
            .parse()
            .unwrap_or_else(|_| panic!("{:?} - Invalid LIMIT: {}", file_path, limit))
    })
}

// Helper function to get the optional result count from the EXPECTED_COUNT: line
pub fn get_expected_count(file_path: &Path) -> Option<usize> {
    get_directive(file_path, "EXPECTED_COUNT:").map(|count| {
        count
            .parse()
            .unwrap_or_else(|_| panic!("{:?} - Invalid EXPECTED_COUNT: {}", file_path, count))
    })
}

// Helper function to get the expected leading CIKs, in rank order, from EXPECTED: lines
pub fn get_expected_ciks(file_path: &Path) -> Vec<Cik> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("EXPECTED:"))
        .map(|cik| {
            cik.trim()
                .parse()
                .unwrap_or_else(|_| panic!("{:?} - Invalid EXPECTED: {}", file_path, cik))
        })
        .collect()
}

// Helper function to run the query described by a test file and check the ranked results
pub fn run_test_for_file(test_file_path: &Path, company_repository: &CompanyRepository) -> Vec<Cik> {
    let query = get_query(test_file_path);

    let results = match get_limit(test_file_path) {
        Some(limit) => company_repository.search_with_limit(&query, limit),
        None => company_repository.search(&query),
    };

    let actual_ciks: Vec<Cik> = results.iter().map(|company| company.cik).collect();

    if let Some(expected_count) = get_expected_count(test_file_path) {
        assert_eq!(
            actual_ciks.len(),
            expected_count,
            "{:?} - Expected {} results for {:?} but found {:?}",
            test_file_path,
            expected_count,
            query,
            actual_ciks
        );
    }

    let expected_ciks = get_expected_ciks(test_file_path);

    assert!(
        actual_ciks.starts_with(&expected_ciks),
        "{:?} - Expected results for {:?} to start with {:?}. Found: {:?}",
        test_file_path,
        query,
        expected_ciks,
        actual_ciks
    );

    actual_ciks
}
