//! 类型转换模块
//!
//! 将数据库模型 (db::models) 转换为 API 响应模型 (soko_shared::models)

use surrealdb::RecordId;

use crate::db::models as db;
use soko_shared::models as api;

// ============ Helper ============

pub fn record_id_to_string(id: &RecordId) -> String {
    id.to_string()
}

pub fn option_record_id_to_string(id: &Option<RecordId>) -> String {
    id.as_ref().map(record_id_to_string).unwrap_or_default()
}

// ============ User ============

impl From<db::User> for api::UserInfo {
    fn from(u: db::User) -> Self {
        Self {
            id: option_record_id_to_string(&u.id),
            email: u.email,
            full_name: u.full_name,
            role: u.role,
            phone: u.phone,
            location: u.location,
            business_name: u.business_name,
            business_description: u.business_description,
            is_verified: u.is_verified,
            subscription_status: u.subscription_status,
            trial_expires_at: u.trial_expires_at,
            created_at: u.created_at,
        }
    }
}

// ============ Buy Request ============

impl From<db::BuyRequest> for api::RequestView {
    fn from(r: db::BuyRequest) -> Self {
        Self {
            id: option_record_id_to_string(&r.id),
            customer_id: record_id_to_string(&r.customer_id),
            title: r.title,
            description: r.description,
            budget_min: r.budget_min,
            budget_max: r.budget_max,
            categories: r.categories,
            location: r.location,
            timeline: r.timeline,
            images: r.images,
            quantity: r.quantity,
            status: r.status,
            created_at: r.created_at,
        }
    }
}

// ============ Offer ============

impl From<db::Offer> for api::OfferView {
    fn from(o: db::Offer) -> Self {
        Self {
            id: option_record_id_to_string(&o.id),
            request_id: record_id_to_string(&o.request_id),
            seller_id: record_id_to_string(&o.seller_id),
            price: o.price,
            description: o.description,
            delivery_details: o.delivery_details,
            images: o.images,
            terms: o.terms,
            status: o.status,
            created_at: o.created_at,
        }
    }
}

// ============ Message ============

impl From<db::Message> for api::MessageView {
    fn from(m: db::Message) -> Self {
        Self {
            id: option_record_id_to_string(&m.id),
            request_id: record_id_to_string(&m.request_id),
            offer_id: m.offer_id.as_ref().map(record_id_to_string),
            sender_id: record_id_to_string(&m.sender_id),
            receiver_id: record_id_to_string(&m.receiver_id),
            content: m.content,
            created_at: m.created_at,
        }
    }
}
