/// Generates the pair of client methods of one unary rpc: a plain one and
/// one that also hands the response to a completion callback.
macro_rules! unary_rpc {
    (
        $(#[$doc: meta])*
        fn $name: ident, $name_with: ident ($request: ty) -> $response: ty = $rpc: expr
    ) => {
        $(#[$doc])*
        pub async fn $name<A>(
            &self,
            request: A,
            options: Option<CallOptions>,
        ) -> crate::Result<$response>
        where
            A: Into<RequestArg<$request>>,
        {
            self.dispatch($rpc, request.into(), options, None::<fn(&$response, &Operation)>)
                .await
        }

        #[doc = concat!(
            "Same as [`Client::", stringify!($name), "`], calling `on_complete` with the ",
            "response and the operation handle before returning."
        )]
        pub async fn $name_with<A, F>(
            &self,
            request: A,
            options: Option<CallOptions>,
            on_complete: F,
        ) -> crate::Result<$response>
        where
            A: Into<RequestArg<$request>>,
            F: FnOnce(&$response, &Operation),
        {
            self.dispatch($rpc, request.into(), options, Some(on_complete))
                .await
        }
    };
}
