//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;

use dnsmadeeasy_provider::{
    ApiEndpoint, CleanupRegistry, ClientConfig, DnsMadeEasyClient, RecordData, env as dme_env,
};
use wiremock::MockServer;

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// Client pointed at a wiremock server under the `/V2.0/` prefix.
pub fn mock_client(server: &MockServer) -> DnsMadeEasyClient {
    let config = ClientConfig::builder("test-api-key", "test-secret")
        .endpoint(ApiEndpoint::Custom(format!("{}/V2.0/", server.uri())))
        .build()
        .expect("valid mock config");
    DnsMadeEasyClient::new(config).expect("client builds")
}

/// 生成唯一的测试域名
pub fn generate_test_domain_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("dme-test-{}.example", &uuid.to_string()[..8])
}

/// 生成唯一的测试记录名称
pub fn generate_test_record_name() -> String {
    let uuid = uuid::Uuid::new_v4();
    format!("_test-{}", &uuid.to_string()[..8])
}

/// 获取测试记录数据（创建和更新）
pub fn record_data_cases() -> Vec<(RecordData, RecordData)> {
    vec![
        (
            RecordData::A {
                address: "192.0.2.1".to_string(),
            },
            RecordData::A {
                address: "192.0.2.2".to_string(),
            },
        ),
        (
            RecordData::AAAA {
                address: "2001:db8::1".to_string(),
            },
            RecordData::AAAA {
                address: "2001:db8::2".to_string(),
            },
        ),
        (
            RecordData::CNAME {
                target: "target1.example.com.".to_string(),
            },
            RecordData::CNAME {
                target: "target2.example.com.".to_string(),
            },
        ),
        (
            RecordData::ANAME {
                target: "apex1.example.com.".to_string(),
            },
            RecordData::ANAME {
                target: "apex2.example.com.".to_string(),
            },
        ),
        (
            RecordData::MX {
                level: 10,
                exchange: "mail1.example.com.".to_string(),
            },
            RecordData::MX {
                level: 20,
                exchange: "mail2.example.com.".to_string(),
            },
        ),
        (
            RecordData::TXT {
                text: "\"test-value-1\"".to_string(),
            },
            RecordData::TXT {
                text: "\"test-value-2\"".to_string(),
            },
        ),
        (
            RecordData::SPF {
                text: "\"v=spf1 include:one.example.com ~all\"".to_string(),
            },
            RecordData::SPF {
                text: "\"v=spf1 include:two.example.com -all\"".to_string(),
            },
        ),
        (
            RecordData::PTR {
                target: "host1.example.com.".to_string(),
            },
            RecordData::PTR {
                target: "host2.example.com.".to_string(),
            },
        ),
        (
            RecordData::NS {
                nameserver: "ns1.delegated.example.com.".to_string(),
            },
            RecordData::NS {
                nameserver: "ns2.delegated.example.com.".to_string(),
            },
        ),
        (
            RecordData::SRV {
                priority: 0,
                weight: 5,
                port: 443,
                target: "srv1.example.com.".to_string(),
            },
            RecordData::SRV {
                priority: 10,
                weight: 10,
                port: 8443,
                target: "srv2.example.com.".to_string(),
            },
        ),
        (
            RecordData::HTTPRED {
                url: "https://example.com/one".to_string(),
                redirect_type: "STANDARD - 301".to_string(),
                hard_link: false,
                title: String::new(),
                keywords: String::new(),
                description: String::new(),
            },
            RecordData::HTTPRED {
                url: "https://example.com/two".to_string(),
                redirect_type: "STANDARD - 302".to_string(),
                hard_link: true,
                title: String::new(),
                keywords: String::new(),
                description: String::new(),
            },
        ),
    ]
}

/// 测试上下文 - 封装沙箱客户端和待清理的域名
pub struct TestContext {
    pub client: DnsMadeEasyClient,
    pub cleanup: CleanupRegistry,
}

impl TestContext {
    /// 创建沙箱测试上下文
    pub fn sandbox() -> Option<Self> {
        let api_key = env::var(dme_env::API_KEY).ok()?;
        let secret_key = env::var(dme_env::SECRET_KEY).ok()?;

        let config = ClientConfig::builder(api_key, secret_key)
            .sandbox()
            .disable_tls_validation(true)
            .build()
            .ok()?;
        let client = DnsMadeEasyClient::new(config).ok()?;

        Some(Self {
            client,
            cleanup: CleanupRegistry::new(),
        })
    }
}
