use super::ede;
use super::message_builder::MessageBuilder;
use super::transport::{TcpTransport, UdpTransport};
use async_trait::async_trait;
use hickory_proto::op::{Message, ResponseCode};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};
use zonecheck_application::ports::DnsResolver;
use zonecheck_domain::config::ResolverConfig;
use zonecheck_domain::{Disposition, DomainError, LookupOutcome, LookupQuery};

/// Resolver client backed by a DNSSEC-validating upstream.
///
/// Every lookup builds a fresh query (new ID, new socket); nothing is
/// cached or shared between calls. Classification inputs come from the
/// upstream's AD bit and, for SERVFAIL answers, its EDE options.
pub struct HickoryDnsClient {
    server_addr: SocketAddr,
    timeout: Duration,
}

impl HickoryDnsClient {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            server_addr,
            timeout,
        }
    }

    pub fn from_config(config: &ResolverConfig) -> Result<Self, DomainError> {
        let server_addr = config.upstream.parse::<SocketAddr>().map_err(|e| {
            DomainError::TransportError(format!(
                "Invalid upstream address '{}': {}",
                config.upstream, e
            ))
        })?;

        Ok(Self::new(
            server_addr,
            Duration::from_millis(config.query_timeout_ms),
        ))
    }

    /// One wire exchange: UDP first, TCP when the response is truncated.
    async fn exchange(&self, query: &LookupQuery, checking_disabled: bool) -> Result<Message, DomainError> {
        let (id, bytes) = MessageBuilder::build_query(query, checking_disabled)?;

        let udp = UdpTransport::new(self.server_addr);
        let response_bytes = udp.send(&bytes, self.timeout).await?;
        let mut response = Self::parse_response(&response_bytes, id)?;

        if response.truncated() {
            debug!(name = %query.name, "UDP response truncated, retrying over TCP");
            let tcp = TcpTransport::new(self.server_addr);
            let response_bytes = tcp.send(&bytes, self.timeout).await?;
            response = Self::parse_response(&response_bytes, id)?;
        }

        Ok(response)
    }

    fn parse_response(bytes: &[u8], expected_id: u16) -> Result<Message, DomainError> {
        let message = Message::from_vec(bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        if message.id() != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                message.id(),
                expected_id
            )));
        }

        Ok(message)
    }

    /// Map a SERVFAIL from the validating upstream.
    ///
    /// With a DNSSEC-related EDE the name is bogus and the option text is
    /// the reason. Without one, strict mode re-probes with CD set: data on
    /// the unvalidated path means the validator rejected the answer, so the
    /// name is still bogus; no data either way is a plain server failure.
    async fn map_servfail(
        &self,
        query: &LookupQuery,
        response: &Message,
        strict: bool,
    ) -> Result<LookupOutcome, DomainError> {
        if let Some(reason) = response
            .extensions()
            .as_ref()
            .and_then(ede::dnssec_failure_reason)
        {
            debug!(name = %query.name, reason = %reason, "Upstream reported DNSSEC failure");
            return Ok(LookupOutcome::new(
                query.name.clone(),
                Disposition::Bogus { reason },
            ));
        }

        if strict {
            match self.exchange(query, true).await {
                Ok(reprobe)
                    if reprobe.response_code() == ResponseCode::NoError
                        && !reprobe.answers().is_empty() =>
                {
                    debug!(
                        name = %query.name,
                        "Answer resolvable with checking disabled, classifying as bogus"
                    );
                    return Ok(LookupOutcome::new(
                        query.name.clone(),
                        Disposition::Bogus {
                            reason: "validation failed upstream (answer exists with checking disabled)"
                                .to_string(),
                        },
                    ));
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(name = %query.name, error = %e, "CD re-probe failed");
                }
            }
        }

        Ok(LookupOutcome::new(query.name.clone(), Disposition::NoData)
            .with_status("SERVFAIL"))
    }
}

fn rcode_text(rcode: ResponseCode) -> String {
    match rcode {
        ResponseCode::NXDomain => "NXDOMAIN".to_string(),
        ResponseCode::ServFail => "SERVFAIL".to_string(),
        ResponseCode::Refused => "REFUSED".to_string(),
        ResponseCode::FormErr => "FORMERR".to_string(),
        ResponseCode::NotImp => "NOTIMP".to_string(),
        other => format!("RCODE{}", u16::from(other.low())),
    }
}

#[async_trait]
impl DnsResolver for HickoryDnsClient {
    async fn lookup(
        &self,
        query: &LookupQuery,
        strict: bool,
    ) -> Result<LookupOutcome, DomainError> {
        let response = self.exchange(query, false).await?;
        let rcode = response.response_code();

        debug!(
            name = %query.name,
            record_type = %query.record_type,
            rcode = ?rcode,
            answers = response.answers().len(),
            ad = response.header().authentic_data(),
            "Upstream response"
        );

        match rcode {
            ResponseCode::NoError if !response.answers().is_empty() => {
                let disposition = if response.header().authentic_data() {
                    Disposition::Secure
                } else {
                    Disposition::Insecure
                };
                Ok(LookupOutcome::new(query.name.clone(), disposition))
            }
            ResponseCode::NoError => {
                Ok(LookupOutcome::new(query.name.clone(), Disposition::NoData))
            }
            ResponseCode::ServFail => self.map_servfail(query, &response, strict).await,
            other => Ok(LookupOutcome::new(query.name.clone(), Disposition::NoData)
                .with_status(rcode_text(other))),
        }
    }
}
