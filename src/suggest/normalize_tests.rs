use super::*;

#[test]
fn strips_bullets_and_list_numbers() {
    let text = "* 珍珠奶茶\n- 四季春\n• 檸檬綠\n1. 烏龍拿鐵\n2) 冬瓜檸檬\n3、紅茶";
    assert_eq!(
        normalize_suggestions(text),
        vec!["珍珠奶茶", "四季春", "檸檬綠", "烏龍拿鐵", "冬瓜檸檬", "紅茶"]
    );
}

#[test]
fn keeps_digits_that_belong_to_the_name() {
    assert_eq!(
        normalize_suggestions("8冰綠\n1號(四季春+珍波椰)"),
        vec!["8冰綠", "1號(四季春+珍波椰)"]
    );
}

#[test]
fn drops_links_citations_and_source_lines() {
    let text = "珍珠奶茶\nhttps://example.com/menu\n[1]\n[2][3]\nSources: menu page\nopen source list\n來源：官網\n紅茶拿鐵";
    assert_eq!(normalize_suggestions(text), vec!["珍珠奶茶", "紅茶拿鐵"]);
}

#[test]
fn drops_any_line_carrying_a_url() {
    let text = "珍珠奶茶\n參考資料：https://x.tw\n官網 http://menu.example\n菜單在 www.example.com\n紅茶拿鐵";
    assert_eq!(normalize_suggestions(text), vec!["珍珠奶茶", "紅茶拿鐵"]);
}

#[test]
fn markdown_links_keep_only_their_text() {
    assert_eq!(
        normalize_suggestions("- [珍珠奶茶](https://example.com/menu)\n**[烏龍拿鐵](https://x.tw/a)**"),
        vec!["珍珠奶茶", "烏龍拿鐵"]
    );
}

#[test]
fn trailing_citations_are_removed() {
    assert_eq!(
        normalize_suggestions("* 四季春 [1]\n檸檬綠[2][3]\n[4]"),
        vec!["四季春", "檸檬綠"]
    );
}

#[test]
fn nested_list_markers_are_stripped() {
    assert_eq!(
        normalize_suggestions("- 1. 紅茶拿鐵\n* 2) 冬瓜檸檬\n- 50嵐招牌"),
        vec!["紅茶拿鐵", "冬瓜檸檬", "50嵐招牌"]
    );
}

#[test]
fn mixed_model_answer_is_fully_cleaned() {
    let text = "- [珍珠奶茶](https://example.com/menu)\n- 1. 紅茶拿鐵\n* 四季春 [1]\n參考資料：https://x.tw";
    assert_eq!(
        normalize_suggestions(text),
        vec!["珍珠奶茶", "紅茶拿鐵", "四季春"]
    );
}

#[test]
fn strips_emphasis_and_dedupes_in_order() {
    let text = "**黃金烏龍**\n\n  \n- 黃金烏龍\n`奶茶`\n黃金烏龍";
    assert_eq!(normalize_suggestions(text), vec!["黃金烏龍", "奶茶"]);
}

#[test]
fn empty_or_blank_text_yields_nothing() {
    assert!(normalize_suggestions("").is_empty());
    assert!(normalize_suggestions("\n  \n*\n").is_empty());
}

#[test]
fn tip_takes_the_first_meaningful_line() {
    assert_eq!(
        normalize_tip("\n**推薦微糖少冰**\n[1]"),
        Some("推薦微糖少冰".to_string())
    );
    assert_eq!(normalize_tip("  \n"), None);
}
