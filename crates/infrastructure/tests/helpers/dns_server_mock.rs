#![allow(dead_code)]

//! Scripted upstream resolver for client tests.
//!
//! Binds a UDP socket on localhost, answers every incoming query with a
//! pre-configured response plan, echoing the query ID and question.

use hickory_proto::op::{Edns, Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::opt::EdnsOption;
use hickory_proto::rr::rdata::NS;
use hickory_proto::rr::{Name, RData, Record};
use std::net::SocketAddr;
use std::str::FromStr;
use tokio::net::UdpSocket;

/// What the mock upstream should answer.
#[derive(Debug, Clone)]
pub enum ResponsePlan {
    /// NOERROR with one NS answer; `authentic` controls the AD bit.
    Answer { authentic: bool },
    /// NOERROR with an empty answer section.
    Empty,
    /// SERVFAIL, optionally carrying an EDE option (info code + text).
    ServFail { ede: Option<(u16, String)> },
    /// Any other rcode, no answers.
    Rcode(ResponseCode),
}

pub struct MockDnsServer {
    pub addr: SocketAddr,
}

impl MockDnsServer {
    /// Spawn a server that answers `count` queries with the given plan,
    /// then stops.
    pub async fn spawn(plan: ResponsePlan, count: usize) -> Self {
        Self::spawn_sequence(vec![plan; count]).await
    }

    /// Spawn a server that answers the n-th query with the n-th plan,
    /// then stops.
    pub async fn spawn_sequence(plans: Vec<ResponsePlan>) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            for plan in plans {
                let Ok((len, from)) = socket.recv_from(&mut buf).await else {
                    return;
                };
                let Ok(query) = Message::from_vec(&buf[..len]) else {
                    continue;
                };
                let response = build_response(&query, &plan);
                let bytes = response.to_vec().unwrap();
                let _ = socket.send_to(&bytes, from).await;
            }
        });

        Self { addr }
    }
}

fn build_response(query: &Message, plan: &ResponsePlan) -> Message {
    let mut response = Message::new(query.id(), MessageType::Response, OpCode::Query);
    response.set_recursion_desired(true);
    response.set_recursion_available(true);

    if let Some(question) = query.queries().first() {
        response.add_query(question.clone());
    }

    match plan {
        ResponsePlan::Answer { authentic } => {
            response.set_response_code(ResponseCode::NoError);
            response.set_authentic_data(*authentic);

            let owner = query
                .queries()
                .first()
                .map(|q| q.name().clone())
                .unwrap_or_else(Name::root);
            let target = Name::from_str("ns1.example.test.").unwrap();
            response.add_answer(Record::from_rdata(owner, 3600, RData::NS(NS(target))));
        }
        ResponsePlan::Empty => {
            response.set_response_code(ResponseCode::NoError);
        }
        ResponsePlan::ServFail { ede } => {
            response.set_response_code(ResponseCode::ServFail);
            if let Some((info_code, text)) = ede {
                let mut payload = info_code.to_be_bytes().to_vec();
                payload.extend_from_slice(text.as_bytes());

                let mut edns = Edns::new();
                edns.set_max_payload(4096);
                edns.options_mut().insert(EdnsOption::Unknown(15, payload));
                response.extensions_mut().replace(edns);
            }
        }
        ResponsePlan::Rcode(rcode) => {
            response.set_response_code(*rcode);
        }
    }

    response
}
