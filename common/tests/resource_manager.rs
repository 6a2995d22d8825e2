mod support;

use common::model::{About, Banner, ContactSubmission, Customer, Faq, Marquee, Order, Review};
use common::resource::{
    FormMode, Method, NoticeLevel, Part, Payload, Phase, ResourceManager,
};
use serde_json::json;
use support::{FakeBackend, FakeUi, png};

fn marquees() -> Vec<serde_json::Value> {
    vec![
        json!({ "_id": "m1", "text": "Free shipping", "icon": "fa-truck" }),
        json!({ "_id": "m2", "text": "New arrivals", "icon": "fa-star" }),
    ]
}

#[tokio::test]
async fn create_then_load_adds_one_record() {
    let backend = FakeBackend::for_resource::<Marquee>(marquees());
    let mut manager: ResourceManager<Marquee, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());

    assert!(manager.load().await);
    assert_eq!(manager.state().records().len(), 2);

    manager.set_value("text", "Summer sale");
    assert!(manager.submit().await);

    let records = manager.state().records();
    assert_eq!(records.len(), 3);
    let created = &records[2];
    assert_eq!(created.text, "Summer sale");
    assert_eq!(created.icon, "fa-envelope");

    let notice = manager.ui().last_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Success);
    assert_eq!(notice.title, "Created!");

    let post = &backend.requests()[1];
    assert_eq!(post.method, Method::Post);
    assert_eq!(post.path, "/api/marquees/add");
    assert_eq!(
        post.payload,
        Some(Payload::Json(json!({ "text": "Summer sale", "icon": "fa-envelope" })))
    );
    assert_eq!(manager.state().mode(), &FormMode::Create);
    assert_eq!(manager.state().form().value("text"), "");
}

#[tokio::test]
async fn edit_then_load_updates_in_place() {
    let backend = FakeBackend::for_resource::<Marquee>(marquees());
    let mut manager: ResourceManager<Marquee, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;

    assert!(manager.edit("m1"));
    assert_eq!(manager.state().phase(), Phase::Editing);
    assert_eq!(manager.state().form().value("icon"), "fa-truck");

    manager.set_value("text", "Free returns");
    assert!(manager.submit().await);

    let records = manager.state().records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].text, "Free returns");
    assert_eq!(records[0].icon, "fa-truck");
    assert_eq!(backend.requests()[1].path, "/api/marquees/update/m1");
    assert_eq!(backend.requests()[1].method, Method::Put);
    assert_eq!(manager.ui().last_notice().unwrap().title, "Updated!");
    assert_eq!(manager.state().phase(), Phase::Idle);
}

#[tokio::test]
async fn declined_delete_sends_nothing() {
    let backend = FakeBackend::for_resource::<Marquee>(marquees());
    let mut manager: ResourceManager<Marquee, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::declining());
    manager.load().await;

    assert!(!manager.remove("m1").await);
    assert_eq!(backend.request_count(), 1);
    assert_eq!(manager.state().records().len(), 2);
    assert_eq!(manager.ui().prompts.len(), 1);
    assert_eq!(manager.ui().prompts[0].text, "You won't be able to revert this!");
}

#[tokio::test]
async fn accepted_delete_removes_record_after_reload() {
    let backend = FakeBackend::for_resource::<Marquee>(marquees());
    let mut manager: ResourceManager<Marquee, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;
    manager.edit("m1");

    assert!(manager.remove("m1").await);

    let methods: Vec<_> = backend.requests().iter().map(|r| r.method).collect();
    assert_eq!(methods, [Method::Get, Method::Delete, Method::Get]);
    assert_eq!(backend.requests()[1].path, "/api/marquees/delete/m1");
    assert!(manager.state().find("m1").is_none());
    assert_eq!(manager.state().records().len(), 1);
    assert_eq!(manager.state().mode(), &FormMode::Create);
    assert_eq!(manager.ui().last_notice().unwrap().title, "Deleted!");
}

#[tokio::test]
async fn unknown_id_is_not_deleted() {
    let backend = FakeBackend::for_resource::<Marquee>(marquees());
    let mut manager: ResourceManager<Marquee, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;

    assert!(!manager.remove("missing").await);
    assert!(manager.ui().prompts.is_empty());
    assert_eq!(backend.request_count(), 1);
}

#[tokio::test]
async fn failed_submit_keeps_form_and_surfaces_server_message() {
    let backend = FakeBackend::for_resource::<Marquee>(marquees());
    let mut manager: ResourceManager<Marquee, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;

    manager.set_value("text", "Half price");
    backend.fail_next(400, "Text is too long");
    assert!(!manager.submit().await);

    let notice = manager.ui().last_notice().unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.text, "Text is too long");
    assert_eq!(manager.state().form().value("text"), "Half price");
    assert_eq!(manager.state().phase(), Phase::Idle);
    assert_eq!(manager.state().records().len(), 2);

    backend.fail_next(500, "");
    assert!(!manager.submit().await);
    assert_eq!(manager.ui().last_notice().unwrap().text, "Something went wrong!");
}

#[tokio::test]
async fn failed_load_empties_collection() {
    let backend = FakeBackend::for_resource::<Marquee>(marquees());
    let mut manager: ResourceManager<Marquee, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;
    assert_eq!(manager.state().records().len(), 2);

    backend.set_offline(true);
    manager.load().await;

    assert!(manager.state().records().is_empty());
    assert!(manager.state().has_loaded());
    let notice = manager.ui().last_notice().unwrap();
    assert_eq!(notice.text, "Failed to fetch marquees.");
    assert_eq!(manager.state().phase(), Phase::Idle);
}

#[tokio::test]
async fn singleton_binds_existing_record() {
    let backend = FakeBackend::for_resource::<About>(vec![json!({
        "_id": "a1",
        "description": "Family run since 1998",
        "image": "/uploads/about.png"
    })]);
    let mut manager: ResourceManager<About, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;

    assert_eq!(manager.state().mode(), &FormMode::Edit { id: "a1".into() });
    assert_eq!(manager.state().form().value("description"), "Family run since 1998");
    assert_eq!(manager.state().form().stored("image"), ["/uploads/about.png"]);

    manager.set_value("description", "Family run since 1999");
    assert!(manager.submit().await);

    let put = &backend.requests()[1];
    assert_eq!(put.method, Method::Put);
    assert_eq!(put.path, "/api/aboutus/updateabout/a1");
    assert!(matches!(put.payload, Some(Payload::Multipart(_))));
    assert_eq!(manager.state().records().len(), 1);
    assert_eq!(manager.state().mode(), &FormMode::Edit { id: "a1".into() });
}

#[tokio::test]
async fn empty_singleton_creates() {
    let backend = FakeBackend::for_resource::<About>(Vec::new());
    let mut manager: ResourceManager<About, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;
    assert_eq!(manager.state().mode(), &FormMode::Create);

    manager.set_value("description", "Hello");
    assert!(manager.submit().await);

    assert_eq!(backend.requests()[1].path, "/api/aboutus/create-about");
    assert_eq!(manager.state().records().len(), 1);
    assert!(manager.state().mode().is_edit());
}

#[tokio::test]
async fn reset_after_preview_leaves_no_live_reference() {
    let backend = FakeBackend::for_resource::<Review>(Vec::new());
    let mut manager: ResourceManager<Review, _, _> =
        ResourceManager::new(backend, FakeUi::accepting());
    manager.load().await;

    manager.attach("image", vec![png("first.png")]);
    manager.attach("image", vec![png("second.png")]);
    assert_eq!(manager.ui().live_previews(), 1);
    assert_eq!(manager.state().form().live_previews().count(), 1);

    manager.reset();
    assert_eq!(manager.ui().live_previews(), 0);
    assert!(!manager.state().form().has_pending());
}

#[tokio::test]
async fn successful_upload_releases_preview_and_stores_image() {
    let backend = FakeBackend::for_resource::<Review>(Vec::new());
    let mut manager: ResourceManager<Review, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;

    assert_eq!(manager.state().form().value("rating"), "5");
    manager.set_value("name", "Priya");
    manager.set_value("comment", "Lovely fabric");
    manager.attach("image", vec![png("priya.png")]);
    assert!(manager.submit().await);

    assert_eq!(manager.ui().live_previews(), 0);
    let review = &manager.state().records()[0];
    assert_eq!(review.rating, "5");
    assert_eq!(review.image.as_deref(), Some("/uploads/priya.png"));

    let Some(Payload::Multipart(parts)) = &backend.requests()[1].payload else {
        panic!("review create must be multipart");
    };
    assert!(parts.iter().any(|part| matches!(
        part,
        Part::File { name, attachment } if name == "image" && attachment.file_name == "priya.png"
    )));
}

#[tokio::test]
async fn banner_edit_keeps_stored_images_until_replaced() {
    let backend = FakeBackend::for_resource::<Banner>(vec![json!({
        "_id": "b1",
        "title": "Diwali",
        "name": "festive",
        "content": "Lights",
        "images": ["one.jpg", "two.jpg"]
    })]);
    let mut manager: ResourceManager<Banner, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;
    manager.edit("b1");

    assert_eq!(manager.state().form().stored("images"), ["one.jpg", "two.jpg"]);

    manager.attach("images", vec![png("a.png"), png("b.png")]);
    assert!(manager.submit().await);

    let Some(Payload::Multipart(parts)) = &backend.requests()[1].payload else {
        panic!("banner update must be multipart");
    };
    let files = parts
        .iter()
        .filter(|part| matches!(part, Part::File { name, .. } if name == "images"))
        .count();
    assert_eq!(files, 2);
}

#[tokio::test]
async fn faq_create_is_sent_as_batch() {
    let backend = FakeBackend::for_resource::<Faq>(Vec::new());
    let mut manager: ResourceManager<Faq, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;

    manager.set_value("question", "Do you ship abroad?");
    manager.set_value("answer", "Yes, to 40 countries.");
    assert!(manager.submit().await);

    let Some(Payload::Multipart(parts)) = &backend.requests()[1].payload else {
        panic!("faq create must be multipart");
    };
    let Part::Text { name, value } = &parts[0] else {
        panic!("first part must be the batch");
    };
    assert_eq!(name, "faqs");
    let batch: serde_json::Value = serde_json::from_str(value).unwrap();
    assert_eq!(
        batch,
        json!([{ "question": "Do you ship abroad?", "answer": "Yes, to 40 countries." }])
    );
    assert_eq!(manager.state().records()[0].question, "Do you ship abroad?");

    let id = manager.state().records()[0].id.clone();
    manager.edit(&id);
    manager.set_value("answer", "Yes.");
    assert!(manager.submit().await);
    assert!(matches!(backend.requests()[3].payload, Some(Payload::Json(_))));
}

#[tokio::test]
async fn submissions_are_paged_by_ten() {
    let submissions = (1..=23)
        .map(|n| json!({ "_id": format!("s{n}"), "name": format!("Guest {n}"), "message": "Hi" }))
        .collect();
    let backend = FakeBackend::for_resource::<ContactSubmission>(submissions);
    let mut manager: ResourceManager<ContactSubmission, _, _> =
        ResourceManager::new(backend, FakeUi::accepting());
    manager.load().await;

    let page = manager.page();
    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 10);
    assert!(!page.has_previous());

    assert!(manager.paginate(3));
    let page = manager.page();
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.offset, 20);
    assert_eq!(page.items[0].name, "Guest 21");
    assert!(!manager.paginate(4));
    assert!(!manager.paginate(0));
    assert_eq!(manager.page().number, 3);
}

#[tokio::test]
async fn deleting_last_item_on_last_page_clamps_page() {
    let submissions = (1..=11)
        .map(|n| json!({ "_id": format!("s{n}"), "name": format!("Guest {n}") }))
        .collect();
    let backend = FakeBackend::for_resource::<ContactSubmission>(submissions);
    let mut manager: ResourceManager<ContactSubmission, _, _> =
        ResourceManager::new(backend, FakeUi::accepting());
    manager.load().await;
    assert!(manager.paginate(2));

    assert!(manager.remove("s11").await);

    assert_eq!(manager.state().page_number(), 1);
    assert_eq!(manager.page().items.len(), 10);
}

#[tokio::test]
async fn customers_are_read_only_except_delete() {
    let backend = FakeBackend::for_resource::<Customer>(vec![json!({
        "_id": "u1",
        "name": "Ana",
        "email": "ana@shop.test",
        "createdAt": "2024-01-02T00:00:00Z"
    })]);
    let mut manager: ResourceManager<Customer, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;

    let created = manager.state().records()[0].created_at.unwrap();
    assert_eq!(created.to_rfc3339(), "2024-01-02T00:00:00+00:00");

    assert!(!manager.edit("u1"));
    assert!(!manager.state().form_available());
    assert!(!manager.submit().await);
    assert_eq!(backend.request_count(), 1);
}

#[tokio::test]
async fn view_fetches_detail_record() {
    let backend = FakeBackend::for_resource::<Customer>(vec![json!({
        "_id": "u1",
        "name": "Ana",
        "email": "ana@shop.test"
    })]);
    let mut manager: ResourceManager<Customer, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;

    assert!(manager.view("u1").await);
    assert_eq!(backend.requests()[1].path, "/api/users/user/u1");
    assert_eq!(manager.state().detail().map(|c| c.name.as_str()), Some("Ana"));

    manager.close_detail();
    assert!(manager.state().detail().is_none());

    assert!(!manager.view("nobody").await);
    assert_eq!(manager.ui().last_notice().unwrap().level, NoticeLevel::Error);
}

#[tokio::test]
async fn search_rejects_unknown_field() {
    let backend = FakeBackend::for_resource::<Customer>(vec![
        json!({ "_id": "u1", "name": "Ana", "email": "ana@shop.test", "location": "Pune" }),
        json!({ "_id": "u2", "name": "Ravi", "email": "ravi@shop.test", "location": "Delhi" }),
    ]);
    let mut manager: ResourceManager<Customer, _, _> =
        ResourceManager::new(backend, FakeUi::accepting());
    manager.load().await;

    assert!(manager.search("location", "DEL"));
    assert_eq!(manager.state().query().field, "location");
    assert_eq!(manager.state().visible().len(), 1);

    assert!(!manager.search("nickname", "ana"));
    assert_eq!(manager.state().query().field, "location");
    assert_eq!(manager.state().query().text, "DEL");
    assert_eq!(manager.state().visible().len(), 1);
}

#[tokio::test]
async fn search_uses_schema_field_without_selector() {
    let backend = FakeBackend::for_resource::<Marquee>(vec![
        json!({ "_id": "m1", "text": "Summer Sale", "icon": "fa-sun" }),
        json!({ "_id": "m2", "text": "New arrivals", "icon": "fa-star" }),
    ]);
    let mut manager: ResourceManager<Marquee, _, _> =
        ResourceManager::new(backend, FakeUi::accepting());
    manager.load().await;

    assert!(manager.search("text", "sale"));
    let ids: Vec<_> = manager.state().visible().iter().map(|m| m.id.clone()).collect();
    assert_eq!(ids, ["m1"]);

    assert!(manager.search("icon", "STAR"));
    let ids: Vec<_> = manager.state().visible().iter().map(|m| m.id.clone()).collect();
    assert_eq!(ids, ["m2"]);
}

#[tokio::test]
async fn new_search_returns_to_first_page() {
    let submissions = (1..=23)
        .map(|n| json!({ "_id": format!("s{n}"), "name": format!("Guest {n}"), "message": "Hi" }))
        .collect();
    let backend = FakeBackend::for_resource::<ContactSubmission>(submissions);
    let mut manager: ResourceManager<ContactSubmission, _, _> =
        ResourceManager::new(backend, FakeUi::accepting());
    manager.load().await;
    assert!(manager.paginate(3));

    assert!(manager.search("name", "guest 1"));
    let page = manager.page();
    assert_eq!(page.number, 1);
    assert_eq!(page.total, 2);
    assert_eq!(page.items[0].name, "Guest 1");
}

#[tokio::test]
async fn faq_batch_sends_every_row() {
    let backend = FakeBackend::for_resource::<Faq>(Vec::new());
    let mut manager: ResourceManager<Faq, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;

    manager.set_value("question", "Do you ship abroad?");
    manager.set_value("answer", "Yes.");
    assert!(manager.add_row());
    assert!(manager.add_row());
    assert!(manager.set_row_value(1, "question", "Can I return items?"));
    assert!(manager.set_row_value(1, "answer", "Within 7 days."));
    assert!(manager.set_row_value(2, "question", "Scratch"));
    assert!(manager.remove_row(2));
    assert!(!manager.remove_row(0));
    assert!(manager.submit().await);

    let questions: Vec<_> = manager
        .state()
        .records()
        .iter()
        .map(|faq| faq.question.as_str())
        .collect();
    assert_eq!(questions, ["Do you ship abroad?", "Can I return items?"]);
    assert_eq!(manager.state().form().row_count(), 1);

    let id = manager.state().records()[0].id.clone();
    assert!(manager.edit(&id));
    assert!(!manager.add_row());
}

#[tokio::test]
async fn faq_page_image_is_uploaded_listed_and_removed() {
    let backend = FakeBackend::for_resource::<Faq>(Vec::new());
    let mut manager: ResourceManager<Faq, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;
    assert_eq!(manager.state().page_image(), None);
    assert!(!manager.remove_page_image().await);

    manager.set_value("question", "Where are you?");
    manager.set_value("answer", "Pune.");
    manager.attach("image", vec![png("faq.png")]);
    assert!(manager.submit().await);

    assert_eq!(manager.state().page_image(), Some("/uploads/faq.png"));
    assert_eq!(manager.ui().live_previews(), 0);

    assert!(manager.remove_page_image().await);
    let delete = backend
        .requests()
        .into_iter()
        .find(|request| request.method == Method::Delete)
        .unwrap();
    assert_eq!(delete.path, "/api/admin/faq-image");
    assert_eq!(manager.state().page_image(), None);
    assert_eq!(backend.page_image(), None);
    assert_eq!(manager.ui().last_notice().unwrap().text, "FAQ image removed.");
    assert_eq!(manager.state().records().len(), 1);
}

#[tokio::test]
async fn failed_page_image_removal_keeps_image() {
    let backend = FakeBackend::for_resource::<Faq>(Vec::new()).with_page_image("/uploads/old.png");
    let mut manager: ResourceManager<Faq, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;
    assert_eq!(manager.state().page_image(), Some("/uploads/old.png"));

    backend.fail_next(500, "disk error");
    assert!(!manager.remove_page_image().await);
    assert_eq!(manager.state().page_image(), Some("/uploads/old.png"));
    assert_eq!(manager.ui().last_notice().unwrap().text, "Failed to delete faq image.");
    assert_eq!(manager.state().phase(), Phase::Idle);
}

#[tokio::test]
async fn orders_list_without_actions() {
    let backend = FakeBackend::for_resource::<Order>(vec![
        json!({ "id": 101, "customer": "John", "amount": 299, "date": "2025-07-10" }),
    ]);
    let mut manager: ResourceManager<Order, _, _> =
        ResourceManager::new(backend, FakeUi::accepting());
    manager.load().await;

    let order = &manager.state().records()[0];
    assert_eq!(order.id, "101");
    assert_eq!(order.amount, "299");
    assert!(!manager.state().form_available());
    assert!(!manager.remove("101").await);
}

#[tokio::test]
async fn unsupported_delete_never_prompts() {
    let backend = FakeBackend::for_resource::<Order>(vec![json!({ "_id": "o1", "customer": "Jane" })]);
    let mut manager: ResourceManager<Order, _, _> =
        ResourceManager::new(backend.clone(), FakeUi::accepting());
    manager.load().await;

    assert!(!manager.remove("o1").await);
    assert!(manager.ui().prompts.is_empty());
    assert_eq!(backend.request_count(), 1);
}
