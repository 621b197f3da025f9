// ==========================================
// 플랫폼 주문 통합 시스템 - 플랫폼 식별자
// ==========================================
// 지원: 10개 마켓/스토어 (네이버 2개 스토어 + 8개 마켓)
// 원칙: 닫힌 열거형, 문자열 식별자는 경계에서만 변환
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 플랫폼 (Platform)
// ==========================================
// 직렬화 형식: kebab-case 식별자 (UI/저장 계층과 일치)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "naver-oneway")]
    NaverOneway, // 네이버 스마트스토어 - 원웨이
    #[serde(rename = "naver-hygge")]
    NaverHygge, // 네이버 스마트스토어 - 휘게
    #[serde(rename = "coupang")]
    Coupang, // 쿠팡
    #[serde(rename = "toss")]
    Toss, // 토스
    #[serde(rename = "ohouse")]
    Ohouse, // 오늘의집
    #[serde(rename = "esm")]
    Esm, // ESM 통합 (G마켓 · 옥션)
    #[serde(rename = "elevenst")]
    Elevenst, // 11번가
    #[serde(rename = "always")]
    Always, // 올웨이즈
    #[serde(rename = "cafe24")]
    Cafe24, // 자사몰 (Cafe24)
    #[serde(rename = "kakao")]
    Kakao, // 카카오
}

impl Platform {
    /// 전체 플랫폼 목록 (등록 순서 = 감지 규칙 우선순위와 무관)
    pub fn all() -> &'static [Platform] {
        &[
            Platform::NaverOneway,
            Platform::NaverHygge,
            Platform::Coupang,
            Platform::Toss,
            Platform::Ohouse,
            Platform::Esm,
            Platform::Elevenst,
            Platform::Always,
            Platform::Cafe24,
            Platform::Kakao,
        ]
    }

    /// 문자열 식별자 (kebab-case)
    pub fn id(&self) -> &'static str {
        match self {
            Platform::NaverOneway => "naver-oneway",
            Platform::NaverHygge => "naver-hygge",
            Platform::Coupang => "coupang",
            Platform::Toss => "toss",
            Platform::Ohouse => "ohouse",
            Platform::Esm => "esm",
            Platform::Elevenst => "elevenst",
            Platform::Always => "always",
            Platform::Cafe24 => "cafe24",
            Platform::Kakao => "kakao",
        }
    }

    /// 운영자용 표시 이름
    pub fn label(&self) -> &'static str {
        match self {
            Platform::NaverOneway => "네이버 원웨이",
            Platform::NaverHygge => "네이버 휘게",
            Platform::Coupang => "쿠팡",
            Platform::Toss => "토스",
            Platform::Ohouse => "오늘의집",
            Platform::Esm => "ESM (G마켓 · 옥션)",
            Platform::Elevenst => "11번가",
            Platform::Always => "올웨이즈",
            Platform::Cafe24 => "자사몰",
            Platform::Kakao => "카카오",
        }
    }

    /// 문자열 식별자 → 플랫폼 (미등록 식별자는 None)
    pub fn from_id(id: &str) -> Option<Platform> {
        Platform::all().iter().copied().find(|p| p.id() == id)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
