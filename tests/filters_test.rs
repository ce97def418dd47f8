use resp_filters::ensemble::Filter;
use resp_filters::error::PipelineError;
use resp_filters::filters::{TakeFirstFilter, TakeKFilter};

fn resps(lists: &[&[&str]]) -> Vec<Vec<String>> {
    lists
        .iter()
        .map(|l| l.iter().map(|r| r.to_string()).collect())
        .collect()
}

#[test]
fn test_take_first_keeps_one_response_per_item() {
    let out = TakeFirstFilter.apply(resps(&[&["A", "B"], &["C"]])).unwrap();
    assert_eq!(out, resps(&[&["A"], &["C"]]));
}

#[test]
fn test_take_first_fails_on_empty_response_list() {
    let result = TakeFirstFilter.apply(resps(&[&["A"], &[]]));
    match result.err().unwrap() {
        PipelineError::NotEnoughResponses {
            item_index,
            available,
            needed,
        } => {
            assert_eq!(item_index, 1);
            assert_eq!(available, 0);
            assert_eq!(needed, 1);
        }
        e => panic!("Expected NotEnoughResponses, got {:?}", e),
    }
}

#[test]
fn test_take_k_truncates_each_item() {
    let filter = TakeKFilter::new(2);
    let out = filter
        .apply(resps(&[&["A", "B", "C"], &["D", "E"]]))
        .unwrap();
    assert_eq!(out, resps(&[&["A", "B"], &["D", "E"]]));
}

#[test]
fn test_take_k_fails_when_item_has_too_few_responses() {
    let filter = TakeKFilter::new(3);
    let result = filter.apply(resps(&[&["A", "B", "C"], &["D"]]));
    match result.err().unwrap() {
        PipelineError::NotEnoughResponses {
            item_index,
            available,
            needed,
        } => {
            assert_eq!(item_index, 1);
            assert_eq!(available, 1);
            assert_eq!(needed, 3);
        }
        e => panic!("Expected NotEnoughResponses, got {:?}", e),
    }
}
