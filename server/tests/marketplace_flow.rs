//! 市场主链路集成测试: 请求 -> 报价 -> 接受 -> 统计 -> 会话

mod common;

use common::{call, post_offer, post_request, register_customer, register_seller, test_state};
use http::{Method, StatusCode};
use serde_json::{Value, json};

fn offer_by_price(offers: &[Value], price: f64) -> &Value {
    offers
        .iter()
        .find(|o| o["price"].as_f64() == Some(price))
        .expect("offer with price")
}

#[tokio::test]
async fn offer_lifecycle_end_to_end() {
    let (state, _tmp) = test_state().await;

    let (customer, _customer_id) = register_customer(&state, "buyer@soko.co.ke", "Buyer").await;
    let (rival, _) = register_customer(&state, "rival@soko.co.ke", "Rival").await;
    let (seller_a, seller_a_id) =
        register_seller(&state, "crafts@soko.co.ke", "Mama Njeri Crafts").await;
    let (seller_b, _) = register_seller(&state, "imports@soko.co.ke", "Coast Imports").await;

    let request_id = post_request(&state, &customer, "Handmade leather bag").await;

    // 开放列表对任何登录用户可见
    let (status, body) = call(&state, Method::GET, "/api/requests", Some(&seller_a), None).await;
    assert_eq!(status, StatusCode::OK);
    let open = body.as_array().unwrap();
    assert_eq!(open.len(), 1);
    assert_eq!(open[0]["status"], "open");
    assert_eq!(open[0]["title"], "Handmade leather bag");

    // 角色门: 卖家不能发请求, 客户不能报价
    let (status, body) = call(
        &state,
        Method::POST,
        "/api/requests",
        Some(&seller_a),
        Some(json!({
            "title": "nope",
            "description": "nope",
            "budget_min": 1.0,
            "budget_max": 2.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN, "{body}");
    let (status, body) = call(
        &state,
        Method::POST,
        "/api/offers",
        Some(&customer),
        Some(json!({
            "request_id": request_id,
            "price": 100.0,
            "description": "nope",
            "delivery_details": "nope"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN, "{body}");

    let offer_a = post_offer(&state, &seller_a, &request_id, 1500.0).await;
    let offer_b = post_offer(&state, &seller_b, &request_id, 1800.0).await;

    // 同一卖家对同一请求只能报一次价
    let (status, body) = call(
        &state,
        Method::POST,
        "/api/offers",
        Some(&seller_a),
        Some(json!({
            "request_id": request_id,
            "price": 1400.0,
            "description": "Second try",
            "delivery_details": "Same"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");
    assert_eq!(body["code"], "E0004");

    // 属主视角: 报价带卖家信息
    let path = format!("/api/offers/request/{request_id}");
    let (status, body) = call(&state, Method::GET, &path, Some(&customer), None).await;
    assert_eq!(status, StatusCode::OK);
    let offers = body.as_array().unwrap().clone();
    assert_eq!(offers.len(), 2);
    let enriched = offer_by_price(&offers, 1500.0);
    assert_eq!(enriched["seller_name"], "Mama Njeri Crafts");
    assert_eq!(enriched["seller_location"], "Mombasa");
    assert_eq!(enriched["seller_id"], seller_a_id);

    // 其他客户不得窥视, 卖家可以看同行
    let (status, _) = call(&state, Method::GET, &path, Some(&rival), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = call(&state, Method::GET, &path, Some(&seller_b), None).await;
    assert_eq!(status, StatusCode::OK);

    // 卖家视角: 自己的报价带请求信息
    let (status, body) = call(&state, Method::GET, "/api/offers/my", Some(&seller_a), None).await;
    assert_eq!(status, StatusCode::OK);
    let mine = body.as_array().unwrap();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0]["request_title"], "Handmade leather bag");
    assert_eq!(mine[0]["request_budget"], "KES 1000-2000");

    // 只有请求属主能接受
    let accept_path = format!("/api/offers/{offer_a}/accept");
    let (status, _) = call(&state, Method::PUT, &accept_path, Some(&seller_a), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = call(&state, Method::PUT, &accept_path, Some(&rival), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = call(&state, Method::PUT, &accept_path, Some(&customer), None).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["message"], "Offer accepted successfully");

    // 接受后: 赢家 accepted, 其余 declined, 请求关闭
    let (_, body) = call(&state, Method::GET, &path, Some(&customer), None).await;
    let offers = body.as_array().unwrap().clone();
    assert_eq!(offer_by_price(&offers, 1500.0)["status"], "accepted");
    assert_eq!(offer_by_price(&offers, 1800.0)["status"], "declined");
    let (_, body) = call(
        &state,
        Method::GET,
        &format!("/api/requests/{request_id}"),
        Some(&seller_b),
        None,
    )
    .await;
    assert_eq!(body["status"], "offer_accepted");

    // 重复接受赢家是幂等成功, 接受输家是冲突
    let (status, _) = call(&state, Method::PUT, &accept_path, Some(&customer), None).await;
    assert_eq!(status, StatusCode::OK);
    let loser_path = format!("/api/offers/{offer_b}/accept");
    let (status, body) = call(&state, Method::PUT, &loser_path, Some(&customer), None).await;
    assert_eq!(status, StatusCode::CONFLICT, "{body}");

    // 关闭的请求退出开放列表
    let (_, body) = call(&state, Method::GET, "/api/requests", Some(&seller_b), None).await;
    assert!(body.as_array().unwrap().is_empty());

    // 双方仪表盘
    let (_, stats) = call(
        &state,
        Method::GET,
        "/api/dashboard/stats",
        Some(&customer),
        None,
    )
    .await;
    assert_eq!(stats["total_requests"], 1);
    assert_eq!(stats["active_requests"], 0);
    assert_eq!(stats["total_offers_received"], 2);

    let (_, stats) = call(
        &state,
        Method::GET,
        "/api/dashboard/stats",
        Some(&seller_a),
        None,
    )
    .await;
    assert_eq!(stats["total_offers"], 1);
    assert_eq!(stats["accepted_offers"], 1);
    assert_eq!(stats["pending_offers"], 0);

    let (_, stats) = call(
        &state,
        Method::GET,
        "/api/dashboard/stats",
        Some(&seller_b),
        None,
    )
    .await;
    assert_eq!(stats["total_offers"], 1);
    assert_eq!(stats["accepted_offers"], 0);
    assert_eq!(stats["pending_offers"], 0);
}

#[tokio::test]
async fn open_listing_applies_filters() {
    let (state, _tmp) = test_state().await;
    let (customer, _) = register_customer(&state, "lister@soko.co.ke", "Lister").await;
    let (seller, _) = register_seller(&state, "browser@soko.co.ke", "Browser Ltd").await;

    // 两个不同预算/分类/地点的请求
    let (status, body) = call(
        &state,
        Method::POST,
        "/api/requests",
        Some(&customer),
        Some(json!({
            "title": "Solar panels",
            "description": "For a rural school",
            "budget_min": 50000.0,
            "budget_max": 80000.0,
            "categories": ["Electronics & Gadgets"],
            "location": "Kisumu"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    post_request(&state, &customer, "Leather sandals").await; // 1000-2000, Custom Items, Nairobi

    // 分类过滤
    let (_, body) = call(
        &state,
        Method::GET,
        "/api/requests?category=Electronics%20%26%20Gadgets",
        Some(&seller),
        None,
    )
    .await;
    let hits = body.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["title"], "Solar panels");

    // 预算按区间重叠匹配: [40000, 60000] 与 [50000, 80000] 相交
    let (_, body) = call(
        &state,
        Method::GET,
        "/api/requests?min_budget=40000&max_budget=60000",
        Some(&seller),
        None,
    )
    .await;
    let hits = body.as_array().unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["title"], "Solar panels");

    // 地点过滤不区分大小写
    let (_, body) = call(
        &state,
        Method::GET,
        "/api/requests?location=kisumu",
        Some(&seller),
        None,
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    // 不匹配的组合
    let (_, body) = call(
        &state,
        Method::GET,
        "/api/requests?category=Automotive",
        Some(&seller),
        None,
    )
    .await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn my_requests_are_scoped_to_the_owner() {
    let (state, _tmp) = test_state().await;
    let (alice, _) = register_customer(&state, "alice@soko.co.ke", "Alice").await;
    let (bob, _) = register_customer(&state, "bob@soko.co.ke", "Bob").await;
    let (seller, _) = register_seller(&state, "shop@soko.co.ke", "Shop").await;

    post_request(&state, &alice, "Alice's order").await;

    let (status, body) = call(&state, Method::GET, "/api/requests/my", Some(&alice), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (_, body) = call(&state, Method::GET, "/api/requests/my", Some(&bob), None).await;
    assert!(body.as_array().unwrap().is_empty());

    // 卖家没有 "我的请求"
    let (status, _) = call(&state, Method::GET, "/api/requests/my", Some(&seller), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // 单个读取是宽松的, 但要求 ID 有效
    let (status, _) = call(
        &state,
        Method::GET,
        "/api/requests/request:doesnotexist",
        Some(&seller),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(
        &state,
        Method::GET,
        "/api/requests/garbage",
        Some(&seller),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn conversation_connects_both_parties() {
    let (state, _tmp) = test_state().await;
    let (customer, customer_id) = register_customer(&state, "talk@soko.co.ke", "Talker").await;
    let (seller, seller_id) = register_seller(&state, "reply@soko.co.ke", "Replier").await;
    let request_id = post_request(&state, &customer, "Ten office chairs").await;
    let offer_id = post_offer(&state, &seller, &request_id, 1200.0).await;

    let (status, body) = call(
        &state,
        Method::POST,
        "/api/messages",
        Some(&customer),
        Some(json!({
            "request_id": request_id,
            "offer_id": offer_id,
            "receiver_id": seller_id,
            "content": "Can you deliver by Friday?"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["sender_id"], customer_id);

    // 毫秒时间戳排序, 隔开两条消息
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let (status, body) = call(
        &state,
        Method::POST,
        "/api/messages",
        Some(&seller),
        Some(json!({
            "request_id": request_id,
            "receiver_id": customer_id,
            "content": "Yes, Friday morning works."
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");

    // 两个方向取到同一条会话, 升序
    let path = format!("/api/messages/conversation/{request_id}?other_user_id={seller_id}");
    let (status, body) = call(&state, Method::GET, &path, Some(&customer), None).await;
    assert_eq!(status, StatusCode::OK);
    let thread = body.as_array().unwrap();
    assert_eq!(thread.len(), 2);
    assert_eq!(thread[0]["content"], "Can you deliver by Friday?");
    assert_eq!(thread[1]["content"], "Yes, Friday morning works.");

    let path = format!("/api/messages/conversation/{request_id}?other_user_id={customer_id}");
    let (_, body) = call(&state, Method::GET, &path, Some(&seller), None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    // 坏 ID 进不了消息表
    let (status, _) = call(
        &state,
        Method::POST,
        "/api/messages",
        Some(&customer),
        Some(json!({
            "request_id": request_id,
            "receiver_id": "not-an-id",
            "content": "hello"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
