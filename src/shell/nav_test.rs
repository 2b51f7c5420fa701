use super::*;
use crate::pages::ROUTES;

fn group(label: &str) -> NavGroup {
    SIDEBAR
        .iter()
        .find_map(|entry| match entry {
            NavEntry::Group(g) if g.label == label => Some(*g),
            _ => None,
        })
        .unwrap_or_else(|| panic!("group {label} missing"))
}

#[test]
fn dashboard_link_matches_exactly() {
    assert!(is_active("/dashboard", "/dashboard"));
    assert!(!is_active("/dashboard", "/dashboard/widgets"));
}

#[test]
fn links_cover_their_subpaths() {
    assert!(is_active("/clients", "/clients"));
    assert!(is_active("/clients", "/clients/abc123"));
    assert!(!is_active("/clients", "/clientsx"));
    assert!(!is_active("/clients", "/sessions"));
}

#[test]
fn crm_group_rules() {
    let crm = group("CRM");
    assert!(crm.active_when.matches("/leads"));
    assert!(crm.active_when.matches("/leads/42"));
    assert!(crm.active_when.matches("/pipeline"));
    assert!(crm.active_when.matches("/deals"));
    assert!(!crm.active_when.matches("/deals/7"));
    assert!(!crm.active_when.matches("/campaigns"));
}

#[test]
fn marketing_group_owns_campaigns() {
    let marketing = group("Marketing");
    assert!(marketing.active_when.matches("/campaigns"));
    assert!(marketing.active_when.matches("/content"));
}

#[test]
fn clients_group_rules() {
    let clients = group("Clients");
    assert!(clients.active_when.matches("/clients/abc123"));
    assert!(clients.active_when.matches("/sessions"));
    assert!(clients.active_when.matches("/projects"));
    assert!(!clients.active_when.matches("/products"));
}

#[test]
fn knowledge_items_highlight_exactly() {
    let knowledge = group("Knowledge Hub");
    let all_docs = knowledge.items[0];
    assert_eq!(all_docs.href, "/knowledge");
    assert!(knowledge.item_active(&all_docs, "/knowledge"));
    assert!(!knowledge.item_active(&all_docs, "/knowledge/finance"));
    assert!(knowledge.active_when.matches("/knowledge/finance"));
}

#[test]
fn knowledge_lists_all_documents_and_nineteen_categories() {
    assert_eq!(KNOWLEDGE_ITEMS.len(), 20);
}

#[test]
fn every_sidebar_link_targets_a_registered_page() {
    let hrefs = SIDEBAR.iter().flat_map(|entry| match entry {
        NavEntry::Link(link) => vec![link.href],
        NavEntry::Group(g) => g.items.iter().map(|i| i.href).collect(),
    });
    for href in hrefs {
        let served = ROUTES.iter().any(|r| {
            r.pattern == href
                || r.pattern
                    .strip_suffix("{category}")
                    .is_some_and(|base| href.strip_prefix(base).is_some_and(|rest| !rest.is_empty()))
        });
        assert!(served, "{href} has no page");
    }
}
