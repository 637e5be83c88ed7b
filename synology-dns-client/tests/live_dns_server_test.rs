//! Synology DSM 集成测试
//!
//! 运行方式:
//! ```bash
//! SYNOLOGY_URL=https://nas.local:5001 SYNOLOGY_USERNAME=xxx SYNOLOGY_PASSWORD=xxx TEST_ZONE=example.com \
//!     cargo test -p synology-dns-client --test live_dns_server_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use synology_dns_client::{
    CreateRecordRequest, Credentials, DeleteRecordRequest, SessionNegotiator, SynologyConfig,
    SynologyError,
};

fn negotiator() -> SessionNegotiator {
    let url = std::env::var("SYNOLOGY_URL").expect("SYNOLOGY_URL");
    let config = SynologyConfig::new(url).expect("无效的 SYNOLOGY_URL");
    SessionNegotiator::new(config).expect("创建 HTTP 客户端失败")
}

fn credentials() -> Credentials {
    Credentials::new(
        std::env::var("SYNOLOGY_USERNAME").expect("SYNOLOGY_USERNAME"),
        std::env::var("SYNOLOGY_PASSWORD").expect("SYNOLOGY_PASSWORD"),
    )
}

// ============ 认证测试 ============

#[tokio::test]
#[ignore]
async fn test_synology_login_logout() {
    skip_if_no_credentials!("SYNOLOGY_URL", "SYNOLOGY_USERNAME", "SYNOLOGY_PASSWORD");

    let mut negotiator = negotiator();
    let session = negotiator.login(&credentials()).await;
    assert!(session.is_ok(), "login 调用失败: {session:?}");
    assert!(negotiator.is_logged_in());

    let result = negotiator.logout().await;
    assert!(result.is_ok(), "logout 调用失败: {result:?}");
    assert!(!negotiator.is_logged_in());

    println!("✓ login/logout 测试通过");
}

#[tokio::test]
#[ignore]
async fn test_synology_wrong_password_is_terminal() {
    skip_if_no_credentials!("SYNOLOGY_URL", "SYNOLOGY_USERNAME");

    let mut negotiator = negotiator();
    let creds = Credentials::new(
        std::env::var("SYNOLOGY_USERNAME").expect("SYNOLOGY_USERNAME"),
        format!("wrong-{}", uuid::Uuid::new_v4()),
    );
    let err = negotiator.login(&creds).await.unwrap_err();

    assert!(
        matches!(err, SynologyError::Api { code: 400, .. }),
        "应返回 400: {err:?}"
    );

    println!("✓ 错误密码测试通过: {err}");
}

// ============ DNS Server 测试 ============

#[tokio::test]
#[ignore]
async fn test_synology_list_zones() {
    skip_if_no_credentials!("SYNOLOGY_URL", "SYNOLOGY_USERNAME", "SYNOLOGY_PASSWORD");

    let mut negotiator = negotiator();
    negotiator
        .login_dns_server(&credentials())
        .await
        .expect("登录失败");
    let dns = negotiator.dns_server().expect("缺少会话");

    let zones = dns.list_zones().await;
    assert!(zones.is_ok(), "list_zones 调用失败: {zones:?}");

    println!("✓ list_zones 测试通过，共 {} 个区域", zones.unwrap().len());
    negotiator.logout().await.ok();
}

#[tokio::test]
#[ignore]
async fn test_synology_record_crud() {
    skip_if_no_credentials!(
        "SYNOLOGY_URL",
        "SYNOLOGY_USERNAME",
        "SYNOLOGY_PASSWORD",
        "TEST_ZONE"
    );

    let zone = std::env::var("TEST_ZONE").expect("TEST_ZONE");
    let mut negotiator = negotiator();
    negotiator
        .login_dns_server(&credentials())
        .await
        .expect("登录失败");
    let dns = negotiator.dns_server().expect("缺少会话");

    let name = format!("_test-{}", &uuid::Uuid::new_v4().to_string()[..8]);
    let created = dns
        .create_record(&CreateRecordRequest::new(&zone, &name, "TXT", "synology-dns-client").ttl(600))
        .await;
    assert!(created.is_ok(), "create_record 调用失败: {created:?}");

    let owner = format!("{name}.{}.", zone.trim_end_matches('.'));
    let records = dns.list_records(&zone).await.expect("list_records 调用失败");
    let record = records
        .iter()
        .find(|r| r.owner_name == owner && r.record_type == "TXT")
        .expect("找不到新建的记录");

    let deleted = dns
        .delete_record(&DeleteRecordRequest::from_record(&zone, record))
        .await;
    assert!(deleted.is_ok(), "delete_record 调用失败: {deleted:?}");

    let records = dns.list_records(&zone).await.expect("list_records 调用失败");
    assert!(
        !records.iter().any(|r| r.owner_name == owner),
        "记录应已删除"
    );

    println!("✓ 记录增删测试通过: {owner}");
    negotiator.logout().await.ok();
}
